//! Scene resolution and best-scene selection.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use chrono::Utc;
use metrics::counter;
use scene_common::{BrokerError, SceneProperties, ScoredScene};
use scene_resolver::ResolvedScene;
use scene_scoring::rank_scenes;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::ApiError;
use crate::state::AppState;

// ============================================================================
// Resolution
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveQuery {
    /// Landsat processing level, e.g. `L1T` or `L1TP`
    pub data_type: Option<String>,
}

/// GET /scenes/:scene_id
#[instrument(skip(state))]
pub async fn resolve_scene_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(scene_id): Path<String>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<ResolvedScene>, ApiError> {
    counter!("broker_requests_total", "endpoint" => "resolve").increment(1);

    let resolved = state
        .resolver
        .resolve(&scene_id, query.data_type.as_deref())?;
    Ok(Json(resolved))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderResponse {
    pub scene_id: String,
    pub folder_url: String,
}

/// GET /scenes/:scene_id/folder
#[instrument(skip(state))]
pub async fn scene_folder_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(scene_id): Path<String>,
) -> Result<Json<FolderResponse>, ApiError> {
    counter!("broker_requests_total", "endpoint" => "folder").increment(1);

    let folder_url = state.resolver.scene_folder_url(&scene_id)?;
    Ok(Json(FolderResponse {
        scene_id,
        folder_url,
    }))
}

// ============================================================================
// Best scene
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct BestSceneRequest {
    pub scenes: Vec<SceneProperties>,
    /// Look up tides before scoring
    #[serde(default)]
    pub tides: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestSceneResponse {
    pub best_scene_id: String,
    pub ranked: Vec<ScoredScene>,
}

/// POST /scenes/best
#[instrument(skip_all)]
pub async fn best_scene_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<BestSceneRequest>,
) -> Result<Json<BestSceneResponse>, ApiError> {
    counter!("broker_requests_total", "endpoint" => "best").increment(1);

    let mut scenes = request.scenes;
    debug!(candidates = scenes.len(), tides = request.tides, "Ranking candidate scenes");
    if scenes.is_empty() {
        return Err(BrokerError::MissingParameter("scenes".to_string()).into());
    }

    if request.tides {
        let enriched = state.tides.enrich(&mut scenes).await?;
        debug!(enriched, "Applied tide predictions");
    }

    let ranked = rank_scenes(scenes, Utc::now());
    let best_scene_id = ranked
        .first()
        .map(|s| s.scene.scene_id.clone())
        .ok_or_else(|| BrokerError::InternalError("ranking produced no scenes".to_string()))?;

    Ok(Json(BestSceneResponse {
        best_scene_id,
        ranked,
    }))
}
