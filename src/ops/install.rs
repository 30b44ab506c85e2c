//! Cache-first install orchestration
//!
//! Resolves the project root before anything else touches the network, then
//! installs from the local cache when the requested version is present and
//! falls back to the registry (backfilling the cache) when it is not.

use crate::error::{PackratError, PackratResult};
use crate::ops::find_project_root;
use crate::registry::RegistryClient;
use crate::store::CacheStore;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// What to install and where
#[derive(Debug, Clone)]
pub struct InstallRequest {
    /// Package name
    pub name: String,
    /// Requested version; latest published when absent
    pub version: Option<String>,
    /// Explicit project directory; discovered from `cwd` when absent
    pub project_dir: Option<PathBuf>,
    /// Directory to start project discovery from
    pub cwd: PathBuf,
}

/// Result of a completed install
#[derive(Debug)]
pub struct InstallOutcome {
    pub name: String,
    /// Version that was installed (resolved when the request had none)
    pub version: String,
    /// Project the package was installed into
    pub project_dir: PathBuf,
    /// Whether the install came from the local cache
    pub from_cache: bool,
    /// Error message from the best-effort cache backfill, if it failed
    pub backfill_error: Option<String>,
}

/// Install a package, preferring the local cache over the registry.
///
/// A failed install from a cached artifact is not retried against the
/// registry; a failed backfill after a registry install is reported in the
/// outcome but does not undo the install.
pub async fn install_package(
    registry: &dyn RegistryClient,
    store: &CacheStore,
    request: &InstallRequest,
) -> PackratResult<InstallOutcome> {
    // No project, no work: abort before any external invocation
    let project_dir = match &request.project_dir {
        Some(dir) => dir.clone(),
        None => find_project_root(&request.cwd)
            .ok_or_else(|| PackratError::NoProjectRoot(request.cwd.clone()))?,
    };

    let version = match &request.version {
        Some(version) => version.clone(),
        None => {
            let latest = registry.latest_version(&request.name).await?;
            debug!("Resolved {} to latest version {}", request.name, latest);
            latest
        }
    };

    if store.exists(&request.name, &version).await {
        info!("Cache hit for {}@{}", request.name, version);
        let artifact = store
            .artifact(&request.name, &version)
            .await?
            .ok_or_else(|| PackratError::ArtifactMissing {
                package: request.name.clone(),
                version: version.clone(),
            })?;
        registry.install_from_path(&artifact, &project_dir).await?;
        return Ok(InstallOutcome {
            name: request.name.clone(),
            version,
            project_dir,
            from_cache: true,
            backfill_error: None,
        });
    }

    info!("Cache miss for {}@{}, installing from registry", request.name, version);
    registry
        .install_from_registry(&request.name, &version, &project_dir)
        .await?;

    // Best-effort backfill; the install already succeeded
    let backfill_error = match backfill(registry, store, &request.name, &version).await {
        Ok(()) => None,
        Err(e) => {
            warn!("Failed to cache {}@{}: {}", request.name, version, e);
            Some(e.to_string())
        }
    };

    Ok(InstallOutcome {
        name: request.name.clone(),
        version,
        project_dir,
        from_cache: false,
        backfill_error,
    })
}

async fn backfill(
    registry: &dyn RegistryClient,
    store: &CacheStore,
    name: &str,
    version: &str,
) -> PackratResult<()> {
    let dest = store.ensure(name, version).await?;
    registry.pack_into(name, version, &dest).await
}
