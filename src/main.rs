//! Setup CLI entrypoint.
//!
//! Parses arguments, runs the setup pipeline with production HTTP
//! implementations, and maps the result to an exit code.

use camino::Utf8PathBuf;
use clap::Parser;
use setup_skaffold::cli::Cli;
use setup_skaffold::download::HttpDownloader;
use setup_skaffold::error::Result;
use setup_skaffold::github::HttpReleaseFetcher;
use setup_skaffold::output::write_stderr_line;
use setup_skaffold::pipeline::{SetupConfig, run_setup};
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stderr: &mut dyn Write) -> Result<()> {
    let cache_root = cli.cache_dir.clone().unwrap_or_else(default_cache_dir);
    let config = SetupConfig {
        version: &cli.version,
        cache_root: &cache_root,
        install_path: &cli.install_path,
        quiet: cli.quiet,
    };

    let fetcher = HttpReleaseFetcher::new(resolve_token(cli.github_token.clone()));
    run_setup(&config, &fetcher, &HttpDownloader, stderr)?;
    Ok(())
}

/// Prefer the CLI token, falling back to the GITHUB_TOKEN environment
/// variable hosted runners provide.
fn resolve_token(flag: Option<String>) -> Option<String> {
    flag.or_else(|| std::env::var("GITHUB_TOKEN").ok())
        .filter(|token| !token.is_empty())
}

/// Default cache directory: the hosted-runner tool cache when available,
/// otherwise a stable directory under the system temp dir.
fn default_cache_dir() -> Utf8PathBuf {
    if let Ok(runner_cache) = std::env::var("RUNNER_TOOL_CACHE")
        && !runner_cache.is_empty()
    {
        return Utf8PathBuf::from(runner_cache);
    }
    let temp = std::env::temp_dir().join("setup-skaffold");
    Utf8PathBuf::from_path_buf(temp).unwrap_or_else(|_| Utf8PathBuf::from("/tmp/setup-skaffold"))
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, err);
            1
        }
    }
}
