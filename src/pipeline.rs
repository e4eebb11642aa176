//! Setup pipeline orchestration.
//!
//! Sequences the stages of a run: resolve the requested version, fetch the
//! binary and its checksum manifest through the cache, verify the digest,
//! and install the binary. Stages run strictly in order; every failure is
//! fatal and there is no rollback of earlier stages (a cached-but-unverified
//! binary remains cached).

use camino::{Utf8Path, Utf8PathBuf};
use std::io::Write;

use crate::artifact;
use crate::cache::{ToolCache, fetch_artifact};
use crate::checksum;
use crate::download::ArtifactDownloader;
use crate::error::{Result, SetupError};
use crate::github::{ReleaseFetcher, resolve_version};
use crate::host;
use crate::output::{success_message, write_stderr_line};

/// Configuration for a setup run.
#[derive(Debug)]
pub struct SetupConfig<'a> {
    /// The requested version token (`latest` or a concrete version).
    pub version: &'a str,
    /// Root directory of the artifact cache.
    pub cache_root: &'a Utf8Path,
    /// Destination path for the installed binary.
    pub install_path: &'a Utf8Path,
    /// When true, suppress progress output.
    pub quiet: bool,
}

/// Run the full setup pipeline and return the install path.
///
/// Dependencies are injected so tests can run the pipeline without network
/// access; production callers pass [`HttpReleaseFetcher`] and
/// [`HttpDownloader`].
///
/// [`HttpReleaseFetcher`]: crate::github::HttpReleaseFetcher
/// [`HttpDownloader`]: crate::download::HttpDownloader
///
/// # Errors
///
/// Returns the first stage failure unchanged: [`SetupError::ReleaseFetch`]
/// from resolution, [`SetupError::Download`] or [`SetupError::Cache`] from
/// fetching, [`SetupError::ChecksumMismatch`] from verification, and
/// [`SetupError::Install`] from installation.
pub fn run_setup(
    config: &SetupConfig<'_>,
    fetcher: &dyn ReleaseFetcher,
    downloader: &dyn ArtifactDownloader,
    stderr: &mut dyn Write,
) -> Result<Utf8PathBuf> {
    if !config.quiet {
        write_stderr_line(
            stderr,
            format!("Requested version of Skaffold is \"{}\"", config.version),
        );
    }

    let version = resolve_version(config.version, fetcher)?;
    if !config.quiet {
        write_stderr_line(stderr, format!("Using version {version}"));
    }

    let cache = ToolCache::new(config.cache_root.to_owned());
    let arch = host::arch();
    let binary_filename = artifact::binary_filename();
    let checksum_filename = artifact::checksum_filename(&binary_filename);

    if !config.quiet {
        write_stderr_line(stderr, "Fetching binary...");
    }
    let binary_path = fetch_artifact(&cache, downloader, &version, arch, &binary_filename)?;
    let manifest_path = fetch_artifact(&cache, downloader, &version, arch, &checksum_filename)?;

    if !config.quiet {
        write_stderr_line(stderr, "Verifying checksum...");
    }
    if !checksum::verify(&binary_path, &binary_filename, &manifest_path)? {
        let digest = checksum::compute_sha256(&binary_path)?;
        return Err(SetupError::ChecksumMismatch {
            filename: binary_filename,
            digest: digest.into_inner(),
        });
    }

    if !config.quiet {
        write_stderr_line(stderr, "Installing binary...");
    }
    let installed = crate::install::install(&binary_path, config.install_path)?;

    if !config.quiet {
        write_stderr_line(stderr, success_message(&version, &installed));
    }

    Ok(installed)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
