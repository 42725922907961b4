//! Imagery Broker API Service Library
//!
//! HTTP surface over scene resolution, the Landsat scene catalog and
//! best-scene selection.

pub mod config;
pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the service router over shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Scenes
        .route("/scenes/best", post(handlers::scenes::best_scene_handler))
        .route(
            "/scenes/:scene_id",
            get(handlers::scenes::resolve_scene_handler),
        )
        .route(
            "/scenes/:scene_id/folder",
            get(handlers::scenes::scene_folder_handler),
        )
        // Catalog
        .route(
            "/catalog",
            get(handlers::catalog::catalog_status_handler),
        )
        // Health and metrics
        .route("/health", get(handlers::health::health_handler))
        .route("/ready", get(handlers::health::ready_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
