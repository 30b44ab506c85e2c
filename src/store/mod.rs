//! On-disk package cache
//!
//! The cache is a bare directory tree `<root>/<name>/<version>/`; the
//! existence of a version directory is the entire record. Its contents are
//! whatever artifact `npm pack` wrote there. There is no manifest, checksum,
//! or eviction - the tree only grows.

use crate::error::{PackratError, PackratResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// A cached `(name, version)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Package name
    pub name: String,
    /// Cached version
    pub version: String,
    /// Directory holding the cached artifact
    pub path: PathBuf,
}

/// Filesystem cache keyed by package name and version
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    /// Create a store rooted at the given directory (not created until needed)
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the cache root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory for a specific package version
    pub fn entry_dir(&self, name: &str, version: &str) -> PathBuf {
        self.root.join(name).join(version)
    }

    /// Check whether a package version is cached
    pub async fn exists(&self, name: &str, version: &str) -> bool {
        match fs::metadata(self.entry_dir(name, version)).await {
            Ok(meta) => meta.is_dir(),
            Err(_) => false,
        }
    }

    /// Create the version directory (and parents) if absent; idempotent
    pub async fn ensure(&self, name: &str, version: &str) -> PackratResult<PathBuf> {
        let dir = self.entry_dir(name, version);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| PackratError::io(format!("creating cache dir {}", dir.display()), e))?;
        Ok(dir)
    }

    /// Locate the packed tarball inside a cache entry, if any
    pub async fn artifact(&self, name: &str, version: &str) -> PackratResult<Option<PathBuf>> {
        let dir = self.entry_dir(name, version);
        let mut reader = match fs::read_dir(&dir).await {
            Ok(reader) => reader,
            Err(_) => return Ok(None),
        };

        while let Some(entry) = reader
            .next_entry()
            .await
            .map_err(|e| PackratError::io(format!("reading cache dir {}", dir.display()), e))?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "tgz") {
                return Ok(Some(path));
            }
        }

        Ok(None)
    }

    /// List all cached `(name, version)` pairs.
    ///
    /// Walks two levels of the tree, skipping non-directory entries. The
    /// listing is recomputed on every call and sorted for stable output.
    pub async fn list(&self) -> PackratResult<Vec<CacheEntry>> {
        let mut entries = Vec::new();

        let mut packages = match fs::read_dir(&self.root).await {
            Ok(reader) => reader,
            // A missing root is an empty cache, not an error
            Err(_) => {
                debug!("Cache root {} does not exist yet", self.root.display());
                return Ok(entries);
            }
        };

        while let Some(package) = packages.next_entry().await.map_err(|e| {
            PackratError::io(format!("reading cache root {}", self.root.display()), e)
        })? {
            let package_path = package.path();
            if !package_path.is_dir() {
                continue;
            }
            let name = package.file_name().to_string_lossy().into_owned();

            let mut versions = fs::read_dir(&package_path).await.map_err(|e| {
                PackratError::io(format!("reading cache dir {}", package_path.display()), e)
            })?;

            while let Some(version) = versions.next_entry().await.map_err(|e| {
                PackratError::io(format!("reading cache dir {}", package_path.display()), e)
            })? {
                let version_path = version.path();
                if !version_path.is_dir() {
                    continue;
                }
                entries.push(CacheEntry {
                    name: name.clone(),
                    version: version.file_name().to_string_lossy().into_owned(),
                    path: version_path,
                });
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.version.cmp(&b.version)));
        Ok(entries)
    }
}
