//! Update command - scan the cache for newer published versions

use crate::cli::args::UpdateArgs;
use crate::config::Config;
use crate::error::PackratResult;
use crate::ops::{ScanOutcome, UpdateScanner};
use crate::registry::NpmCli;
use crate::store::CacheStore;
use crate::ui::{self, UiContext};
use std::path::PathBuf;

/// Execute the update command.
///
/// The cooldown only suppresses repeat scans within one process; a fresh
/// invocation always scans.
pub async fn execute(args: UpdateArgs, config: &Config, cache_root: PathBuf) -> PackratResult<()> {
    let ctx = UiContext::detect().with_auto_yes(args.yes);
    ui::intro(&ctx, "packrat update");

    let registry = NpmCli::new(config.npm.binary.clone());
    let store = CacheStore::new(cache_root);
    let mut scanner = UpdateScanner::new(config.update.cooldown_hours);

    let report = match scanner.scan(&registry, &store, &ctx).await? {
        ScanOutcome::Skipped => {
            ui::outro_success(&ctx, "Already checked recently, skipping");
            return Ok(());
        }
        ScanOutcome::Completed(report) => report,
    };

    if report.checked == 0 {
        ui::outro_success(&ctx, "Cache is empty, nothing to check");
        return Ok(());
    }

    for (name, old, new) in &report.upgraded {
        ui::step_ok(&ctx, &format!("{} {} -> {} cached", name, old, new));
    }
    for name in &report.declined {
        ui::step_info(&ctx, &format!("{} left as is", name));
    }

    ui::outro_success(
        &ctx,
        &format!(
            "Checked {} version(s): {} updated, {} declined, {} current",
            report.checked,
            report.upgraded.len(),
            report.declined.len(),
            report.current
        ),
    );

    Ok(())
}
