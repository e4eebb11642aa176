//! Binary installation.
//!
//! Copies a verified binary to its final location with restricted
//! permissions. The install path defaults to `/usr/local/bin/skaffold` and
//! is injectable for testing.

use crate::error::{Result, SetupError};
use camino::{Utf8Path, Utf8PathBuf};

/// The default install destination for the Skaffold binary.
pub const DEFAULT_INSTALL_PATH: &str = "/usr/local/bin/skaffold";

/// Install `source` at `dest`, overwriting any existing file there.
///
/// The file mode is set to owner-read+execute only (`0o500`) before the
/// copy, so the installed binary carries the restricted permissions. There
/// is no privilege escalation: a permission failure is fatal.
///
/// # Errors
///
/// Returns [`SetupError::Install`] if the permissions cannot be set or the
/// copy fails.
pub fn install(source: &Utf8Path, dest: &Utf8Path) -> Result<Utf8PathBuf> {
    set_executable(source)?;
    // A previous install leaves a read-only file at dest; remove it first so
    // the copy can recreate it.
    match std::fs::remove_file(dest.as_std_path()) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(SetupError::Install {
                path: dest.to_owned(),
                reason: format!("removing existing file: {e}"),
            });
        }
    }
    std::fs::copy(source.as_std_path(), dest.as_std_path()).map_err(|e| SetupError::Install {
        path: dest.to_owned(),
        reason: e.to_string(),
    })?;
    Ok(dest.to_owned())
}

/// Set the file mode to `0o500` (owner read and execute only).
#[cfg(unix)]
fn set_executable(path: &Utf8Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path.as_std_path(), std::fs::Permissions::from_mode(0o500)).map_err(
        |e| SetupError::Install {
            path: path.to_owned(),
            reason: format!("setting permissions: {e}"),
        },
    )
}

/// Windows has no unix mode bits; the copy alone suffices.
#[cfg(not(unix))]
fn set_executable(_path: &Utf8Path) -> Result<()> {
    Ok(())
}
