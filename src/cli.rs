//! CLI argument definitions for the setup tool.
//!
//! Separated from the main entrypoint to keep the binary small and focused
//! on orchestration.

use camino::Utf8PathBuf;
use clap::Parser;

/// Fetch, verify, and install a Skaffold release binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "setup-skaffold")]
#[command(about, disable_version_flag = true)]
#[command(long_about = concat!(
    "Fetch, verify, and install a Skaffold release binary.\n\n",
    "Given a version (\"latest\" or a concrete version such as \"2.13.0\"), ",
    "this tool resolves the concrete version, downloads the binary for the ",
    "host platform and architecture, validates it against the published ",
    "SHA-256 checksum manifest, and installs it with executable permissions. ",
    "Downloads are cached so repeated runs avoid the network.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Install the latest release:\n",
    "    $ setup-skaffold\n\n",
    "  Install a specific version:\n",
    "    $ setup-skaffold --version 2.13.0\n\n",
    "  Use an authenticated metadata request (higher rate limits):\n",
    "    $ setup-skaffold --github-token $GITHUB_TOKEN\n",
))]
pub struct Cli {
    /// Version of Skaffold to install.
    #[arg(short = 'V', long, value_name = "VERSION", default_value = "latest")]
    pub version: String,

    /// GitHub access token for authenticated metadata requests
    /// [default: the GITHUB_TOKEN environment variable].
    #[arg(long, value_name = "TOKEN")]
    pub github_token: Option<String>,

    /// Cache directory for downloaded artifacts
    /// [default: $RUNNER_TOOL_CACHE, or a directory under the system temp dir].
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<Utf8PathBuf>,

    /// Destination path for the installed binary.
    #[arg(long, value_name = "PATH", default_value = crate::install::DEFAULT_INSTALL_PATH)]
    pub install_path: Utf8PathBuf,

    /// Suppress progress output (errors still shown).
    #[arg(short, long)]
    pub quiet: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self::parse_from(["setup-skaffold"])
    }
}
