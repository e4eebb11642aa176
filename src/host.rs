//! Host platform and architecture detection.
//!
//! Maps the identifiers the Rust runtime reports to the naming convention
//! Skaffold uses for its release artifacts. The maps are pure functions over
//! the reported value so that they can be tested without inspecting the
//! build host.

/// Map a reported CPU architecture to Skaffold's naming convention.
///
/// `x64` and `x86_64` become `amd64`, `aarch64` becomes `arm64`; any other
/// value passes through unchanged.
///
/// # Examples
///
/// ```
/// use setup_skaffold::host::map_arch;
///
/// assert_eq!(map_arch("x64"), "amd64");
/// assert_eq!(map_arch("arm64"), "arm64");
/// ```
#[must_use]
pub fn map_arch(raw: &str) -> &str {
    match raw {
        "x64" | "x86_64" => "amd64",
        "aarch64" => "arm64",
        other => other,
    }
}

/// Map a reported OS platform to Skaffold's naming convention.
///
/// `win32` becomes `windows` and `macos` becomes `darwin`; any other value
/// passes through unchanged.
///
/// # Examples
///
/// ```
/// use setup_skaffold::host::map_platform;
///
/// assert_eq!(map_platform("win32"), "windows");
/// assert_eq!(map_platform("linux"), "linux");
/// ```
#[must_use]
pub fn map_platform(raw: &str) -> &str {
    match raw {
        "win32" | "windows" => "windows",
        "macos" => "darwin",
        other => other,
    }
}

/// Return the architecture of the running host in Skaffold's naming.
#[must_use]
pub fn arch() -> &'static str {
    map_arch(std::env::consts::ARCH)
}

/// Return the OS platform of the running host in Skaffold's naming.
#[must_use]
pub fn platform() -> &'static str {
    map_platform(std::env::consts::OS)
}
