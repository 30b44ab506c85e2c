//! Prune command - reserved for a cache retention policy

use crate::error::PackratResult;
use crate::ui::{self, UiContext};

/// Execute the prune command.
///
/// Retention is not implemented: accepted upgrades keep the stale version
/// directory next to the new one, and nothing ever deletes cache entries.
/// TODO: prune versions superseded by an accepted upgrade once a retention
/// policy is settled.
pub async fn execute() -> PackratResult<()> {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "packrat prune");
    ui::remark(&ctx, "Cache retention is not implemented; nothing was removed.");
    ui::outro_success(&ctx, "Done");
    Ok(())
}
