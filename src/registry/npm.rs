//! Registry client backed by the npm CLI
//!
//! Every operation shells out to npm and surfaces non-zero exits as wrapped
//! errors. No retry and no timeout wrapper; a spawned process runs to
//! completion or failure.

use crate::error::{PackratError, PackratResult};
use crate::registry::RegistryClient;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Registry client invoking the npm executable
pub struct NpmCli {
    binary: String,
}

impl NpmCli {
    /// Create a client for the given npm binary name or path
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Execute an npm command and return the output
    async fn exec(&self, args: &[&str], cwd: Option<&Path>) -> PackratResult<std::process::Output> {
        debug!("Executing: {} {:?} (cwd: {:?})", self.binary, args, cwd);

        let mut command = Command::new(&self.binary);
        command
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        command.output().await.map_err(|e| {
            PackratError::command_failed(format!("{} {}", self.binary, args.join(" ")), e)
        })
    }
}

impl Default for NpmCli {
    fn default() -> Self {
        Self::new("npm")
    }
}

#[async_trait]
impl RegistryClient for NpmCli {
    async fn latest_version(&self, name: &str) -> PackratResult<String> {
        let output = self.exec(&["view", name, "version"], None).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PackratError::VersionQuery {
                package: name.to_string(),
                reason: stderr.trim().to_string(),
            });
        }

        parse_version_output(name, &String::from_utf8_lossy(&output.stdout))
    }

    async fn pack_into(&self, name: &str, version: &str, dest_dir: &Path) -> PackratResult<()> {
        let spec = format!("{}@{}", name, version);
        let output = self.exec(&["pack", &spec], Some(dest_dir)).await?;

        if output.status.success() {
            debug!("Packed {} into {}", spec, dest_dir.display());
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(PackratError::Pack {
                package: name.to_string(),
                version: version.to_string(),
                reason: stderr.trim().to_string(),
            })
        }
    }

    async fn install_from_path(&self, artifact: &Path, project_dir: &Path) -> PackratResult<()> {
        let artifact_arg = artifact.display().to_string();
        let output = self
            .exec(&["install", &artifact_arg], Some(project_dir))
            .await?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(PackratError::Install {
                spec: artifact_arg,
                reason: stderr.trim().to_string(),
            })
        }
    }

    async fn install_from_registry(
        &self,
        name: &str,
        version: &str,
        project_dir: &Path,
    ) -> PackratResult<()> {
        let spec = format!("{}@{}", name, version);
        let output = self.exec(&["install", &spec], Some(project_dir)).await?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(PackratError::Install {
                spec,
                reason: stderr.trim().to_string(),
            })
        }
    }
}

/// Parse the stdout of `npm view <name> version` into a single version string
fn parse_version_output(name: &str, stdout: &str) -> PackratResult<String> {
    let version = stdout.trim();
    if version.is_empty() || version.contains(char::is_whitespace) {
        return Err(PackratError::VersionParse {
            package: name.to_string(),
            output: stdout.to_string(),
        });
    }
    Ok(version.to_string())
}
