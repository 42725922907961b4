//! The live scene catalog.
//!
//! ## State
//! Starts not-ready. The first successful refresh makes it ready, and it
//! stays ready from then on: a failed refresh leaves the last good snapshot
//! in place.
//!
//! ## Concurrency
//! The live snapshot sits behind an `ArcSwapOption`. Lookups load the
//! current `Arc` without locking and keep reading it even if a refresh
//! swaps in a newer one mid-lookup. Refreshes are serialized by an async
//! mutex that lookups never touch.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwapOption;
use chrono::{DateTime, Utc};
use metrics::{counter, gauge};
use scene_common::{BrokerError, BrokerResult};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{info, instrument};

use crate::parse::parse_scene_list;
use crate::snapshot::{CatalogEntry, CatalogSnapshot};
use crate::source::CatalogSource;

/// Outcome of one successful refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshSummary {
    pub entries: usize,
    pub refreshed_at: DateTime<Utc>,
    pub elapsed: Duration,
}

/// Refresh counters.
#[derive(Default)]
pub struct CatalogStats {
    pub refreshes_succeeded: AtomicU64,
    pub refreshes_failed: AtomicU64,
}

/// Scene ID → storage location map, replaced wholesale on each refresh.
pub struct SceneCatalog {
    source: Arc<dyn CatalogSource>,
    live: ArcSwapOption<CatalogSnapshot>,
    refresh_lock: Mutex<()>,
    stats: CatalogStats,
}

impl SceneCatalog {
    /// Create an empty, not-ready catalog backed by `source`.
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            live: ArcSwapOption::empty(),
            refresh_lock: Mutex::new(()),
            stats: CatalogStats::default(),
        }
    }

    /// True once any refresh has succeeded.
    pub fn is_ready(&self) -> bool {
        self.live.load().is_some()
    }

    /// The current snapshot, for callers that need several consistent reads.
    pub fn snapshot(&self) -> Option<Arc<CatalogSnapshot>> {
        self.live.load_full()
    }

    /// Look up one scene in the current snapshot.
    pub fn lookup(&self, scene_id: &str) -> BrokerResult<CatalogEntry> {
        let guard = self.live.load();
        match &*guard {
            None => Err(BrokerError::CatalogNotReady),
            Some(snapshot) => snapshot
                .get(scene_id)
                .cloned()
                .ok_or_else(|| BrokerError::SceneNotFound(scene_id.to_string())),
        }
    }

    pub fn stats(&self) -> &CatalogStats {
        &self.stats
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Fetch, parse and swap in a complete new snapshot.
    ///
    /// On any failure the live snapshot is left untouched.
    #[instrument(skip(self), fields(source = %self.source.describe()))]
    pub async fn refresh(&self) -> BrokerResult<RefreshSummary> {
        let _serialized = self.refresh_lock.lock().await;
        let started = Instant::now();

        match self.fetch_and_parse().await {
            Ok(snapshot) => {
                let summary = RefreshSummary {
                    entries: snapshot.len(),
                    refreshed_at: snapshot.refreshed_at(),
                    elapsed: started.elapsed(),
                };
                self.live.store(Some(Arc::new(snapshot)));

                self.stats.refreshes_succeeded.fetch_add(1, Ordering::Relaxed);
                counter!("scene_catalog_refresh_total", "outcome" => "success").increment(1);
                gauge!("scene_catalog_entries").set(summary.entries as f64);
                gauge!("scene_catalog_last_refresh_timestamp_seconds")
                    .set(summary.refreshed_at.timestamp() as f64);

                info!(
                    entries = summary.entries,
                    elapsed_ms = summary.elapsed.as_millis() as u64,
                    "Scene catalog refreshed"
                );
                Ok(summary)
            }
            Err(e) => {
                self.stats.refreshes_failed.fetch_add(1, Ordering::Relaxed);
                counter!("scene_catalog_refresh_total", "outcome" => "failure").increment(1);
                Err(e)
            }
        }
    }

    /// Start a refresh in the background and hand back its completion.
    ///
    /// Dropping or timing out on the handle does not cancel the refresh;
    /// its result still lands in the shared catalog.
    pub fn spawn_refresh(self: &Arc<Self>) -> JoinHandle<BrokerResult<RefreshSummary>> {
        let catalog = Arc::clone(self);
        tokio::spawn(async move { catalog.refresh().await })
    }

    async fn fetch_and_parse(&self) -> BrokerResult<CatalogSnapshot> {
        let gz = self.source.fetch().await?;

        // Decompression and CSV parsing are CPU-bound
        let entries = tokio::task::spawn_blocking(move || parse_scene_list(&gz))
            .await
            .map_err(|e| BrokerError::InternalError(format!("Scene list parser panicked: {}", e)))??;

        Ok(CatalogSnapshot::new(entries, Utc::now()))
    }
}
