//! GitHub release metadata queries and version resolution.
//!
//! The sentinel version `latest` is resolved by asking the GitHub API for
//! the most recent release and stripping the leading `v` from its tag name.
//! Any other requested version passes through unchanged.

use crate::error::{Result, SetupError};
use serde::Deserialize;
use std::sync::OnceLock;
use std::time::Duration;

/// The sentinel version token requesting dynamic resolution.
pub const LATEST: &str = "latest";

/// Network timeout for release metadata requests.
const API_TIMEOUT: Duration = Duration::from_secs(30);

/// A GitHub release, as returned by the releases API.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// The git tag the release was published under (e.g. `v2.13.0`).
    pub tag_name: String,
}

/// The error body GitHub returns on failing status codes.
#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Trait for fetching release metadata from GitHub.
///
/// Abstractions allow tests to resolve versions without network access.
#[cfg_attr(test, mockall::automock)]
pub trait ReleaseFetcher {
    /// Fetch the latest release for `repo` (in `owner/repo` form).
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::ReleaseFetch`] if the endpoint responds with an
    /// error status or the response body has an unexpected shape.
    fn latest_release(&self, repo: &str) -> Result<Release>;
}

/// Production release fetcher backed by the GitHub REST API.
pub struct HttpReleaseFetcher {
    token: Option<String>,
}

impl HttpReleaseFetcher {
    /// Create a fetcher, attaching `token` as a bearer authorization header
    /// on every request when present.
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

impl ReleaseFetcher for HttpReleaseFetcher {
    fn latest_release(&self, repo: &str) -> Result<Release> {
        let url = format!("https://api.github.com/repos/{repo}/releases/latest");
        log::debug!("fetching release metadata from {url}");

        let mut request = api_agent().get(&url);
        if let Some(token) = &self.token {
            let auth = format!("Bearer {token}");
            request = request.header("Authorization", auth.as_str());
        }

        let response = request.call().map_err(|e| SetupError::ReleaseFetch {
            repo: repo.to_owned(),
            message: e.to_string(),
        })?;

        let status = response.status().as_u16();
        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| SetupError::ReleaseFetch {
                repo: repo.to_owned(),
                message: e.to_string(),
            })?;

        if status >= 400 {
            return Err(SetupError::ReleaseFetch {
                repo: repo.to_owned(),
                message: error_message(&body, status),
            });
        }

        serde_json::from_str(&body).map_err(|e| SetupError::ReleaseFetch {
            repo: repo.to_owned(),
            message: format!("unexpected response shape: {e}"),
        })
    }
}

/// Shared `ureq` agent for API requests.
///
/// Error statuses are surfaced as responses rather than transport errors so
/// that the JSON error body remains readable.
fn api_agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(API_TIMEOUT))
            .http_status_as_error(false)
            .build();
        ureq::Agent::new_with_config(config)
    })
}

/// Extract the human-readable message from a GitHub error body.
fn error_message(body: &str, status: u16) -> String {
    serde_json::from_str::<ApiError>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| format!("HTTP {status}"))
}

/// Resolve a requested version token to a concrete version string.
///
/// `latest` is resolved via `fetcher` and the tag name loses exactly one
/// leading `v`; any other token passes through unchanged.
///
/// # Errors
///
/// Returns [`SetupError::ReleaseFetch`] when resolving `latest` fails.
pub fn resolve_version(requested: &str, fetcher: &dyn ReleaseFetcher) -> Result<String> {
    if requested != LATEST {
        return Ok(requested.to_owned());
    }
    let release = fetcher.latest_release(crate::artifact::GITHUB_REPO)?;
    let tag = release.tag_name;
    match tag.strip_prefix('v') {
        Some(rest) => Ok(rest.to_owned()),
        None => Ok(tag),
    }
}
