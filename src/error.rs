//! Error types for the setup pipeline.
//!
//! Each stage of the pipeline has a semantic error variant. Every error is
//! fatal at its origin and propagates unchanged to the top-level run
//! function, which prints it and exits non-zero.

use crate::download::DownloadError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while setting up the Skaffold binary.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The release metadata endpoint returned an error status.
    #[error("failed to fetch latest release for {repo}: {message}")]
    ReleaseFetch {
        /// The `owner/repo` identifier that was queried.
        repo: String,
        /// The upstream error message.
        message: String,
    },

    /// Network fetch of a binary or manifest artifact failed.
    #[error(transparent)]
    Download(#[from] DownloadError),

    /// Local cache read or write failure.
    #[error("cache operation failed: {reason}")]
    Cache {
        /// Description of the cache failure.
        reason: String,
    },

    /// The computed digest was not found in the checksum manifest.
    ///
    /// Distinct from I/O errors: this signals possible corruption or
    /// tampering of the downloaded binary.
    #[error("checksum mismatch for {filename}: computed digest {digest} not found in manifest")]
    ChecksumMismatch {
        /// The binary filename that failed verification.
        filename: String,
        /// The digest computed from the downloaded binary.
        digest: String,
    },

    /// Permission or filesystem failure during the final copy/chmod.
    #[error("failed to install to {path}: {reason}")]
    Install {
        /// The install destination.
        path: Utf8PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`SetupError`].
pub type Result<T> = std::result::Result<T, SetupError>;
