//! Artifact naming and URL construction for Skaffold releases.
//!
//! Release binaries are published as `skaffold-{platform}-{arch}` (with an
//! `.exe` suffix on windows) under a versioned tag on the GitHub release
//! page, with a sibling checksum manifest named by appending `.sha256`.

use crate::host;

/// The tool name used for cache keys and the installed binary.
pub const TOOL_NAME: &str = "skaffold";

/// The GitHub repository publishing Skaffold releases.
pub const GITHUB_REPO: &str = "GoogleContainerTools/skaffold";

/// Suffix appended to a binary filename to name its checksum manifest.
pub const CHECKSUM_SUFFIX: &str = ".sha256";

/// Return the release binary filename for the given platform and arch.
///
/// # Examples
///
/// ```
/// use setup_skaffold::artifact::binary_filename_for;
///
/// assert_eq!(binary_filename_for("linux", "amd64"), "skaffold-linux-amd64");
/// assert_eq!(
///     binary_filename_for("windows", "amd64"),
///     "skaffold-windows-amd64.exe"
/// );
/// ```
#[must_use]
pub fn binary_filename_for(platform: &str, arch: &str) -> String {
    let mut filename = format!("{TOOL_NAME}-{platform}-{arch}");
    if platform == "windows" {
        filename.push_str(".exe");
    }
    filename
}

/// Return the release binary filename for the running host.
#[must_use]
pub fn binary_filename() -> String {
    binary_filename_for(host::platform(), host::arch())
}

/// Return the checksum manifest filename for a binary filename.
#[must_use]
pub fn checksum_filename(binary_filename: &str) -> String {
    format!("{binary_filename}{CHECKSUM_SUFFIX}")
}

/// Construct the download URL for a release asset.
///
/// # Examples
///
/// ```
/// use setup_skaffold::artifact::release_url;
///
/// let url = release_url("2.13.0", "skaffold-linux-amd64");
/// assert_eq!(
///     url,
///     "https://github.com/GoogleContainerTools/skaffold/releases/download/v2.13.0/skaffold-linux-amd64"
/// );
/// ```
#[must_use]
pub fn release_url(version: &str, filename: &str) -> String {
    format!("https://github.com/{GITHUB_REPO}/releases/download/v{version}/{filename}")
}
