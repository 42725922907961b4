//! Ranking candidate scenes.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use scene_common::{SceneProperties, ScoredScene};
use tracing::debug;

use crate::score::score_scene;

/// NaN never wins a comparison.
fn rank_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score
    }
}

/// Score every candidate and order them best first.
///
/// The sort is stable, so equal scores keep their input order.
pub fn rank_scenes(scenes: Vec<SceneProperties>, now: DateTime<Utc>) -> Vec<ScoredScene> {
    let mut ranked: Vec<ScoredScene> = scenes
        .into_iter()
        .map(|scene| {
            let score = score_scene(&scene, now);
            debug!(scene_id = %scene.scene_id, score, "Scored scene");
            ScoredScene { scene, score }
        })
        .collect();

    ranked.sort_by(|a, b| {
        rank_key(b.score)
            .partial_cmp(&rank_key(a.score))
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

/// ID of the highest-scoring candidate; the first one wins ties.
pub fn select_best(scenes: &[SceneProperties], now: DateTime<Utc>) -> Option<String> {
    let mut best: Option<(&SceneProperties, f64)> = None;

    for scene in scenes {
        let score = rank_key(score_scene(scene, now));
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((scene, score)),
        }
    }

    best.map(|(scene, _)| scene.scene_id.clone())
}
