//! Scene catalog status.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::{extract::Extension, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatus {
    pub ready: bool,
    pub entries: usize,
    pub refreshed_at: Option<DateTime<Utc>>,
    pub refreshes_succeeded: u64,
    pub refreshes_failed: u64,
    pub source: String,
}

/// GET /catalog
pub async fn catalog_status_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<CatalogStatus> {
    let snapshot = state.catalog.snapshot();
    let stats = state.catalog.stats();

    Json(CatalogStatus {
        ready: snapshot.is_some(),
        entries: snapshot.as_ref().map(|s| s.len()).unwrap_or(0),
        refreshed_at: snapshot.as_ref().map(|s| s.refreshed_at()),
        refreshes_succeeded: stats.refreshes_succeeded.load(Ordering::Relaxed),
        refreshes_failed: stats.refreshes_failed.load(Ordering::Relaxed),
        source: state.catalog.source_description(),
    })
}
