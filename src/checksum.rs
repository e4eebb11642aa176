//! Checksum computation and manifest verification.
//!
//! Skaffold publishes a checksum manifest alongside each binary: a text file
//! of `"<hex-digest>  <filename>"` lines. Verification computes the binary's
//! SHA-256 digest and checks that the expected line appears in the manifest.

use crate::digest::Sha256Digest;
use camino::Utf8Path;
use sha2::{Digest, Sha256};
use std::io::Read;

/// Compute the SHA-256 digest of the file at `path`.
///
/// The file is streamed through the hasher in fixed-size chunks, so
/// arbitrarily large files are handled without loading them into memory.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
pub fn compute_sha256(path: &Utf8Path) -> std::io::Result<Sha256Digest> {
    let mut file = std::fs::File::open(path.as_std_path())?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }
    let hex = format!("{:x}", hasher.finalize());
    // sha2 always produces valid 64-char lowercase hex.
    Ok(Sha256Digest::try_from(hex).expect("sha2 produces valid 64-char lowercase hex"))
}

/// Format the manifest line expected for a digest and filename.
///
/// The two-space separator matches the output of `sha256sum`.
#[must_use]
pub fn expected_line(digest: &Sha256Digest, filename: &str) -> String {
    format!("{digest}  {filename}")
}

/// Verify a downloaded binary against its checksum manifest.
///
/// Computes the binary's digest and returns `true` iff the line
/// `"<digest>  <filename>"` appears in the manifest text. Manifests may
/// contain multiple entries or trailing whitespace; matching is by line
/// containment, not whole-file equality. A mismatch returns `Ok(false)`;
/// unreadable files are I/O errors.
///
/// # Errors
///
/// Returns an I/O error if the binary or the manifest cannot be read.
pub fn verify(
    binary_path: &Utf8Path,
    binary_filename: &str,
    manifest_path: &Utf8Path,
) -> std::io::Result<bool> {
    let digest = compute_sha256(binary_path)?;
    let manifest = std::fs::read_to_string(manifest_path.as_std_path())?;
    let needle = expected_line(&digest, binary_filename);
    Ok(manifest.lines().any(|line| line.trim_end() == needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    /// SHA-256 of the empty input, a well-known constant.
    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn sandbox() -> (tempfile::TempDir, Utf8PathBuf) {
        let temp = tempfile::tempdir().expect("temp dir");
        let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).expect("UTF-8 path");
        (temp, root)
    }

    fn write_file(dir: &Utf8Path, name: &str, content: &[u8]) -> Utf8PathBuf {
        let path = dir.join(name);
        std::fs::write(path.as_std_path(), content).expect("write file");
        path
    }

    #[test]
    fn digest_of_empty_file_matches_known_constant() {
        let (_temp, root) = sandbox();
        let path = write_file(&root, "empty", b"");
        let digest = compute_sha256(&path).expect("digest");
        assert_eq!(digest.as_str(), EMPTY_SHA256);
    }

    #[test]
    fn verify_accepts_matching_manifest_line() {
        let (_temp, root) = sandbox();
        let binary = write_file(&root, "skaffold-linux-amd64", b"binary content");
        let digest = compute_sha256(&binary).expect("digest");
        let manifest = write_file(
            &root,
            "skaffold-linux-amd64.sha256",
            format!("{digest}  skaffold-linux-amd64\n").as_bytes(),
        );
        assert!(verify(&binary, "skaffold-linux-amd64", &manifest).expect("verify"));
    }

    #[test]
    fn verify_accepts_manifest_with_multiple_entries() {
        let (_temp, root) = sandbox();
        let binary = write_file(&root, "skaffold-linux-amd64", b"binary content");
        let digest = compute_sha256(&binary).expect("digest");
        let manifest_text = format!(
            "{}  skaffold-darwin-arm64\n{digest}  skaffold-linux-amd64\n",
            "b".repeat(64)
        );
        let manifest = write_file(&root, "checksums", manifest_text.as_bytes());
        assert!(verify(&binary, "skaffold-linux-amd64", &manifest).expect("verify"));
    }

    #[test]
    fn verify_rejects_wrong_digest() {
        let (_temp, root) = sandbox();
        let binary = write_file(&root, "skaffold-linux-amd64", b"binary content");
        let manifest = write_file(
            &root,
            "skaffold-linux-amd64.sha256",
            format!("{}  skaffold-linux-amd64\n", "a".repeat(64)).as_bytes(),
        );
        assert!(!verify(&binary, "skaffold-linux-amd64", &manifest).expect("verify"));
    }

    #[test]
    fn single_byte_mutation_flips_verification() {
        let (_temp, root) = sandbox();
        let binary = write_file(&root, "skaffold-linux-amd64", b"binary content");
        let digest = compute_sha256(&binary).expect("digest");
        let manifest = write_file(
            &root,
            "skaffold-linux-amd64.sha256",
            format!("{digest}  skaffold-linux-amd64\n").as_bytes(),
        );
        assert!(verify(&binary, "skaffold-linux-amd64", &manifest).expect("verify"));

        write_file(&root, "skaffold-linux-amd64", b"binary Content");
        assert!(!verify(&binary, "skaffold-linux-amd64", &manifest).expect("verify"));
    }

    #[test]
    fn verify_rejects_wrong_filename() {
        let (_temp, root) = sandbox();
        let binary = write_file(&root, "skaffold-linux-amd64", b"binary content");
        let digest = compute_sha256(&binary).expect("digest");
        let manifest = write_file(
            &root,
            "checksums",
            format!("{digest}  skaffold-linux-arm64\n").as_bytes(),
        );
        assert!(!verify(&binary, "skaffold-linux-amd64", &manifest).expect("verify"));
    }

    #[test]
    fn missing_manifest_is_an_io_error() {
        let (_temp, root) = sandbox();
        let binary = write_file(&root, "skaffold-linux-amd64", b"binary content");
        let missing = root.join("no-such-manifest");
        assert!(verify(&binary, "skaffold-linux-amd64", &missing).is_err());
    }
}
