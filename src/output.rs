//! Progress output helpers for the CLI.
//!
//! User-facing progress goes to an injected writer so that tests can capture
//! it; errors still shown when `--quiet` suppresses progress.

use camino::Utf8Path;
use std::io::Write;

/// Write a line to the given writer, ignoring write failures.
pub fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}

/// Format the success message printed after installation.
#[must_use]
pub fn success_message(version: &str, install_path: &Utf8Path) -> String {
    format!("Skaffold {version} is ready to use at {install_path}")
}
