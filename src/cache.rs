//! Local artifact cache.
//!
//! Downloads are cached under `<root>/<tool>/<version>/<arch>/<filename>` so
//! repeated runs avoid the network entirely. Entries have no expiry policy;
//! the cache root outlives this process and is assumed exclusive to it for
//! the run's duration. An interrupted copy into the cache can leave an
//! unusable entry behind; there is no cleanup pass.

use crate::artifact;
use crate::download::ArtifactDownloader;
use crate::error::{Result, SetupError};
use camino::{Utf8Path, Utf8PathBuf};

/// A filesystem cache keyed by (tool, version, arch).
#[derive(Debug, Clone)]
pub struct ToolCache {
    root: Utf8PathBuf,
}

impl ToolCache {
    /// Create a cache rooted at `root`. The directory need not exist yet.
    #[must_use]
    pub fn new(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    /// Return the cache root.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Look up a cached file under the given key.
    ///
    /// Returns the cached path on a hit, or `None` on a miss. Lookups are
    /// per-filename, so the binary and its checksum manifest miss
    /// independently even though they share a key.
    #[must_use]
    pub fn find(&self, tool: &str, version: &str, arch: &str, filename: &str) -> Option<Utf8PathBuf> {
        let path = self.entry_dir(tool, version, arch).join(filename);
        path.is_file().then_some(path)
    }

    /// Copy `source` into the cache under the given key, creating the entry
    /// directory as needed, and return the cached path.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Cache`] if the entry directory cannot be
    /// created or the copy fails.
    pub fn cache_file(
        &self,
        source: &Utf8Path,
        filename: &str,
        tool: &str,
        version: &str,
        arch: &str,
    ) -> Result<Utf8PathBuf> {
        let entry_dir = self.entry_dir(tool, version, arch);
        std::fs::create_dir_all(entry_dir.as_std_path()).map_err(|e| SetupError::Cache {
            reason: format!("creating {entry_dir}: {e}"),
        })?;
        let dest = entry_dir.join(filename);
        std::fs::copy(source.as_std_path(), dest.as_std_path()).map_err(|e| SetupError::Cache {
            reason: format!("copying {source} to {dest}: {e}"),
        })?;
        Ok(dest)
    }

    /// Directory holding all files cached under one key.
    fn entry_dir(&self, tool: &str, version: &str, arch: &str) -> Utf8PathBuf {
        self.root.join(tool).join(version).join(arch)
    }
}

/// Fetch a release artifact through the cache.
///
/// A cache hit returns the stored path with no network call and no
/// re-download. On a miss the artifact is downloaded from the release page
/// into a scratch directory, registered into the cache, and the cached path
/// is returned.
///
/// # Errors
///
/// Returns [`SetupError::Download`] if the network fetch fails and
/// [`SetupError::Cache`] if the cache cannot be populated.
pub fn fetch_artifact(
    cache: &ToolCache,
    downloader: &dyn ArtifactDownloader,
    version: &str,
    arch: &str,
    filename: &str,
) -> Result<Utf8PathBuf> {
    if let Some(cached) = cache.find(artifact::TOOL_NAME, version, arch, filename) {
        log::debug!("cache hit for {filename}");
        return Ok(cached);
    }

    let url = artifact::release_url(version, filename);
    let scratch = tempfile::tempdir()?;
    let download_path = scratch.path().join(filename);
    downloader.download(&url, &download_path)?;

    let source =
        Utf8PathBuf::try_from(download_path).map_err(|e| SetupError::Cache {
            reason: format!("scratch path is not valid UTF-8: {e}"),
        })?;
    cache.cache_file(&source, filename, artifact::TOOL_NAME, version, arch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::MockArtifactDownloader;

    fn sandbox_cache() -> (tempfile::TempDir, ToolCache) {
        let temp = tempfile::tempdir().expect("temp dir");
        let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).expect("UTF-8 path");
        (temp, ToolCache::new(root))
    }

    fn populate(cache: &ToolCache, filename: &str, content: &[u8]) -> Utf8PathBuf {
        let scratch = tempfile::tempdir().expect("scratch dir");
        let source = Utf8PathBuf::try_from(scratch.path().join(filename)).expect("UTF-8 path");
        std::fs::write(&source, content).expect("write source");
        cache
            .cache_file(&source, filename, "skaffold", "2.13.0", "amd64")
            .expect("cache file")
    }

    #[test]
    fn find_misses_on_empty_cache() {
        let (_temp, cache) = sandbox_cache();
        assert!(
            cache
                .find("skaffold", "2.13.0", "amd64", "skaffold-linux-amd64")
                .is_none()
        );
    }

    #[test]
    fn cache_file_then_find_hits() {
        let (_temp, cache) = sandbox_cache();
        let cached = populate(&cache, "skaffold-linux-amd64", b"binary");
        let found = cache
            .find("skaffold", "2.13.0", "amd64", "skaffold-linux-amd64")
            .expect("hit");
        assert_eq!(found, cached);
        assert_eq!(std::fs::read(found.as_std_path()).expect("read"), b"binary");
    }

    #[test]
    fn sibling_filenames_miss_independently() {
        let (_temp, cache) = sandbox_cache();
        populate(&cache, "skaffold-linux-amd64", b"binary");
        assert!(
            cache
                .find("skaffold", "2.13.0", "amd64", "skaffold-linux-amd64.sha256")
                .is_none()
        );
    }

    #[test]
    fn fetch_artifact_hit_performs_no_network_call() {
        let (_temp, cache) = sandbox_cache();
        populate(&cache, "skaffold-linux-amd64", b"binary");

        let mut downloader = MockArtifactDownloader::new();
        downloader.expect_download().never();

        let path = fetch_artifact(&cache, &downloader, "2.13.0", "amd64", "skaffold-linux-amd64")
            .expect("cached path");
        assert!(path.as_str().ends_with("skaffold-linux-amd64"));
    }

    #[test]
    fn fetch_artifact_miss_downloads_and_caches() {
        let (_temp, cache) = sandbox_cache();

        let mut downloader = MockArtifactDownloader::new();
        downloader
            .expect_download()
            .withf(|url, _| {
                url == "https://github.com/GoogleContainerTools/skaffold/releases/download/v2.13.0/skaffold-linux-amd64"
            })
            .times(1)
            .returning(|_, dest| std::fs::write(dest, b"binary").map_err(Into::into));

        let path = fetch_artifact(&cache, &downloader, "2.13.0", "amd64", "skaffold-linux-amd64")
            .expect("downloaded path");
        assert!(cache
            .find("skaffold", "2.13.0", "amd64", "skaffold-linux-amd64")
            .is_some());
        assert_eq!(std::fs::read(path.as_std_path()).expect("read"), b"binary");
    }

    #[test]
    fn fetch_artifact_download_failure_propagates() {
        let (_temp, cache) = sandbox_cache();

        let mut downloader = MockArtifactDownloader::new();
        downloader.expect_download().returning(|url, _| {
            Err(crate::download::DownloadError::NotFound {
                url: url.to_owned(),
            })
        });

        let err = fetch_artifact(&cache, &downloader, "9.9.9", "amd64", "skaffold-linux-amd64")
            .expect_err("expected failure");
        assert!(matches!(err, SetupError::Download(_)));
    }
}
