//! Core operations: cache-first install and the update scan

pub mod install;
pub mod update;

pub use install::{install_package, InstallOutcome, InstallRequest};
pub use update::{ScanOutcome, ScanReport, UpdateScanner};

use std::path::{Path, PathBuf};

/// Walk up from `start` looking for a directory containing package.json
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        if dir.join("package.json").is_file() {
            return Some(dir.to_path_buf());
        }
        current = dir.parent();
    }
    None
}

#[cfg(test)]
pub(crate) mod testing {
    //! A registry fake that records every invocation, used to verify the
    //! orchestrator and scanner without spawning npm.

    use crate::error::{PackratError, PackratResult};
    use crate::registry::RegistryClient;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// One recorded registry invocation
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Latest(String),
        Pack(String, String, PathBuf),
        InstallPath(PathBuf, PathBuf),
        InstallRegistry(String, String, PathBuf),
    }

    #[derive(Default)]
    pub struct FakeRegistry {
        /// Latest published version per package name
        pub latest: HashMap<String, String>,
        /// Package names whose version query should fail
        pub fail_latest: Vec<String>,
        pub fail_pack: bool,
        pub fail_install_path: bool,
        pub fail_install_registry: bool,
        pub calls: Mutex<Vec<Call>>,
    }

    impl FakeRegistry {
        pub fn with_latest(pairs: &[(&str, &str)]) -> Self {
            Self {
                latest: pairs
                    .iter()
                    .map(|(n, v)| (n.to_string(), v.to_string()))
                    .collect(),
                ..Self::default()
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl RegistryClient for FakeRegistry {
        async fn latest_version(&self, name: &str) -> PackratResult<String> {
            self.record(Call::Latest(name.to_string()));
            if self.fail_latest.iter().any(|n| n == name) {
                return Err(PackratError::VersionQuery {
                    package: name.to_string(),
                    reason: "simulated failure".to_string(),
                });
            }
            self.latest
                .get(name)
                .cloned()
                .ok_or_else(|| PackratError::VersionQuery {
                    package: name.to_string(),
                    reason: "E404 not found".to_string(),
                })
        }

        async fn pack_into(
            &self,
            name: &str,
            version: &str,
            dest_dir: &Path,
        ) -> PackratResult<()> {
            self.record(Call::Pack(
                name.to_string(),
                version.to_string(),
                dest_dir.to_path_buf(),
            ));
            if self.fail_pack {
                return Err(PackratError::Pack {
                    package: name.to_string(),
                    version: version.to_string(),
                    reason: "simulated failure".to_string(),
                });
            }
            // Leave an artifact behind like npm pack would
            std::fs::write(
                dest_dir.join(format!("{}-{}.tgz", name, version)),
                b"tarball",
            )
            .map_err(|e| PackratError::io("writing fake tarball", e))?;
            Ok(())
        }

        async fn install_from_path(
            &self,
            artifact: &Path,
            project_dir: &Path,
        ) -> PackratResult<()> {
            self.record(Call::InstallPath(
                artifact.to_path_buf(),
                project_dir.to_path_buf(),
            ));
            if self.fail_install_path {
                return Err(PackratError::Install {
                    spec: artifact.display().to_string(),
                    reason: "simulated failure".to_string(),
                });
            }
            Ok(())
        }

        async fn install_from_registry(
            &self,
            name: &str,
            version: &str,
            project_dir: &Path,
        ) -> PackratResult<()> {
            self.record(Call::InstallRegistry(
                name.to_string(),
                version.to_string(),
                project_dir.to_path_buf(),
            ));
            if self.fail_install_registry {
                return Err(PackratError::Install {
                    spec: format!("{}@{}", name, version),
                    reason: "simulated failure".to_string(),
                });
            }
            Ok(())
        }
    }
}
