//! Shared test utilities for the setup crate.
//!
//! Exposed to the behavioural test suite via the `test-support` feature.

use sha2::{Digest, Sha256};

/// Return the lowercase hex SHA-256 digest of `data`.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// Build a checksum manifest pairing the digest of `content` with `filename`.
///
/// Uses the two-space separator `sha256sum` emits.
#[must_use]
pub fn manifest_for(content: &[u8], filename: &str) -> String {
    format!("{}  {filename}\n", sha256_hex(content))
}

/// Build a checksum manifest whose digest does not match any real content.
#[must_use]
pub fn mismatched_manifest_for(filename: &str) -> String {
    format!("{}  {filename}\n", "a".repeat(64))
}
