//! Install command - cache-first package install

use crate::cli::args::InstallArgs;
use crate::config::Config;
use crate::error::{PackratError, PackratResult};
use crate::ops::{install_package, InstallRequest};
use crate::registry::NpmCli;
use crate::store::CacheStore;
use crate::ui::{self, TaskSpinner, UiContext};
use std::path::PathBuf;

/// Execute the install command
pub async fn execute(args: InstallArgs, config: &Config, cache_root: PathBuf) -> PackratResult<()> {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "packrat install");

    let name = match args.name {
        Some(name) => name,
        None => ui::input_optional(&ctx, "Package name")
            .await?
            .ok_or_else(|| PackratError::User("package name is required".to_string()))?,
    };

    let version = match args.pkg_version {
        Some(version) => Some(version),
        None => ui::input_optional(&ctx, "Version (empty for latest)").await?,
    };

    let registry = NpmCli::new(config.npm.binary.clone());
    let store = CacheStore::new(cache_root);
    let request = InstallRequest {
        name: name.clone(),
        version,
        project_dir: args.project,
        cwd: std::env::current_dir()
            .map_err(|e| PackratError::io("getting current directory", e))?,
    };

    let mut spinner = TaskSpinner::new(&ctx);
    spinner.start(&format!("Installing {}...", name));

    let outcome = match install_package(&registry, &store, &request).await {
        Ok(outcome) => outcome,
        Err(e) => {
            spinner.stop_error(&format!("Install failed: {}", e));
            return Err(e);
        }
    };

    spinner.stop(&format!("Installed {}@{}", outcome.name, outcome.version));
    ui::key_value(&ctx, "project", &outcome.project_dir.display().to_string());

    if outcome.from_cache {
        ui::outro_success(
            &ctx,
            &format!("{}@{} installed from cache", outcome.name, outcome.version),
        );
    } else if let Some(reason) = outcome.backfill_error {
        ui::step_warn(&ctx, &format!("Could not cache the package: {}", reason));
        ui::outro_warn(
            &ctx,
            &format!(
                "{}@{} installed from registry (not cached)",
                outcome.name, outcome.version
            ),
        );
    } else {
        ui::outro_success(
            &ctx,
            &format!(
                "{}@{} installed from registry and cached",
                outcome.name, outcome.version
            ),
        );
    }

    Ok(())
}
