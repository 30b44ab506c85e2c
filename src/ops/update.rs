//! Update scan over the package cache
//!
//! Compares every cached version against the latest published one and offers
//! an interactive upgrade per mismatch. Gated by a cooldown held in process
//! memory only, so every process start allows an immediate scan.

use crate::error::PackratResult;
use crate::registry::RegistryClient;
use crate::store::CacheStore;
use crate::ui::{self, UiContext};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

/// Result of asking the scanner to run
#[derive(Debug)]
pub enum ScanOutcome {
    /// Within the cooldown window; nothing was queried
    Skipped,
    /// Scan ran to completion
    Completed(ScanReport),
}

/// What a completed scan did
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Cache entries checked against the registry
    pub checked: usize,
    /// Upgrades taken: (name, old version, new version)
    pub upgraded: Vec<(String, String, String)>,
    /// Packages where the operator declined the offered upgrade
    pub declined: Vec<String>,
    /// Entries already at the latest version
    pub current: usize,
}

/// Cooldown-gated scanner over the cache
pub struct UpdateScanner {
    cooldown: Duration,
    last_check: Option<DateTime<Utc>>,
}

impl UpdateScanner {
    /// Create a scanner that runs at most once per `cooldown_hours`
    pub fn new(cooldown_hours: u64) -> Self {
        Self {
            cooldown: Duration::hours(cooldown_hours as i64),
            last_check: None,
        }
    }

    /// When the last successful scan finished, if any
    pub fn last_check(&self) -> Option<DateTime<Utc>> {
        self.last_check
    }

    /// Run the scan unless it is still within the cooldown window.
    ///
    /// A single failed registry query aborts the remaining scan and leaves
    /// the cooldown timestamp untouched, so the next trigger retries
    /// immediately. Accepted upgrades add a new version directory next to the
    /// old one; stale versions are never deleted.
    pub async fn scan(
        &mut self,
        registry: &dyn RegistryClient,
        store: &CacheStore,
        ctx: &UiContext,
    ) -> PackratResult<ScanOutcome> {
        if let Some(last) = self.last_check {
            if Utc::now() - last < self.cooldown {
                debug!("Update scan suppressed; last ran at {}", last);
                return Ok(ScanOutcome::Skipped);
            }
        }

        let entries = store.list().await?;
        info!("Scanning {} cached package version(s) for updates", entries.len());

        let mut report = ScanReport::default();
        for entry in &entries {
            let latest = registry.latest_version(&entry.name).await?;
            report.checked += 1;

            if latest == entry.version {
                report.current += 1;
                continue;
            }

            let accept = ui::confirm(
                ctx,
                &format!("Update {} {} -> {}?", entry.name, entry.version, latest),
                false,
            )
            .await?;

            if accept {
                let dest = store.ensure(&entry.name, &latest).await?;
                registry.pack_into(&entry.name, &latest, &dest).await?;
                report
                    .upgraded
                    .push((entry.name.clone(), entry.version.clone(), latest));
            } else {
                report.declined.push(entry.name.clone());
            }
        }

        self.last_check = Some(Utc::now());
        Ok(ScanOutcome::Completed(report))
    }
}
