//! Registry client abstraction
//!
//! The install orchestrator and update scanner only ever talk to the registry
//! through this trait, so they can be exercised against a fake implementation
//! without spawning real npm processes.

mod npm;

pub use npm::NpmCli;

use crate::error::PackratResult;
use async_trait::async_trait;
use std::path::Path;

/// Narrow interface over the external package registry tooling
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Resolve the latest published version of a package
    async fn latest_version(&self, name: &str) -> PackratResult<String>;

    /// Materialize `name@version` as a tarball inside `dest_dir`
    async fn pack_into(&self, name: &str, version: &str, dest_dir: &Path) -> PackratResult<()>;

    /// Install a dependency from a local artifact into a project
    async fn install_from_path(&self, artifact: &Path, project_dir: &Path) -> PackratResult<()>;

    /// Install `name@version` from the public registry into a project
    async fn install_from_registry(
        &self,
        name: &str,
        version: &str,
        project_dir: &Path,
    ) -> PackratResult<()>;
}
