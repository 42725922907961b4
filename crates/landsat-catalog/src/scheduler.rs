//! Periodic catalog refresh.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::cache::SceneCatalog;

/// Spawn [`run_periodic_refresh`] onto the runtime.
pub fn spawn_periodic_refresh(
    catalog: Arc<SceneCatalog>,
    interval: Duration,
    shutdown: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(run_periodic_refresh(catalog, interval, shutdown))
}

/// Refresh the catalog once per `interval` until shutdown.
///
/// The first tick fires immediately and is skipped only when the catalog
/// is already ready, so a failed warm-up is retried right away instead of
/// one interval later. Failures are logged and otherwise swallowed, so
/// lookups keep using the last good snapshot.
pub async fn run_periodic_refresh(
    catalog: Arc<SceneCatalog>,
    interval: Duration,
    mut shutdown: broadcast::Receiver<()>,
) {
    let interval = interval.max(Duration::from_millis(1));
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut first_tick = true;

    info!(
        interval_secs = interval.as_secs(),
        source = %catalog.source_description(),
        "Starting periodic scene catalog refresh"
    );

    loop {
        tokio::select! {
            _ = shutdown.recv() => {
                info!("Shutting down scene catalog refresh");
                break;
            }
            _ = ticker.tick() => {
                if std::mem::take(&mut first_tick) && catalog.is_ready() {
                    debug!("Scene catalog already warm, waiting for next interval");
                    continue;
                }
                match catalog.refresh().await {
                    Ok(summary) => {
                        debug!(entries = summary.entries, "Scheduled scene catalog refresh complete");
                    }
                    Err(e) => {
                        warn!(
                            error = %e,
                            serving_stale = catalog.is_ready(),
                            "Failed to update scene ID to URL map"
                        );
                    }
                }
            }
        }
    }
}
