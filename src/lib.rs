//! Setup library for the Skaffold binary.
//!
//! This crate fetches, verifies, and installs a Skaffold release binary
//! matching a requested version. It is used by the `setup-skaffold` CLI
//! binary and can be consumed programmatically for testing or custom
//! workflows.
//!
//! # Modules
//!
//! - [`artifact`] - Release artifact naming and URL construction
//! - [`cache`] - Local artifact cache keyed by (tool, version, arch)
//! - [`checksum`] - SHA-256 computation and manifest verification
//! - [`cli`] - Command-line argument definitions
//! - [`digest`] - Validated SHA-256 digest newtype
//! - [`download`] - HTTP artifact download abstraction
//! - [`error`] - Semantic error types
//! - [`github`] - Release metadata queries and version resolution
//! - [`host`] - Host platform/architecture naming
//! - [`install`] - Final binary installation
//! - [`output`] - Progress output helpers
//! - [`pipeline`] - Setup pipeline orchestration

pub mod artifact;
pub mod cache;
pub mod checksum;
pub mod cli;
pub mod digest;
pub mod download;
pub mod error;
pub mod github;
pub mod host;
pub mod install;
pub mod output;
pub mod pipeline;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
