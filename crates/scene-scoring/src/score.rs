//! Desirability score for a single scene.
//!
//! Starts from a baseline of 1.0 (0.5 for scenes acquired before 2015,
//! which are often missing from the archive) and subtracts three
//! terms:
//!
//! - cloud: `sqrt(cloud_cover / 100)`
//! - recency: `(acquired - now) / decade`, signed offset from `now`
//! - tide: `sqrt(0.1) * (max - current) / (max - min)`, or the full
//!   `sqrt(0.1)` when no usable tide reading exists (assume low tide)
//!
//! A scene whose acquisition date cannot be parsed scores exactly 0.0.

use chrono::{DateTime, Utc};
use scene_common::{parse_acquired_date, SceneProperties};

const FULL_BASELINE: f64 = 1.0;
const ARCHIVAL_BASELINE: f64 = 0.5;

/// 2015-01-01T00:00:00Z
pub const ARCHIVE_CUTOFF_UNIX: i64 = 1_420_070_400;

/// Seconds in ten 365-day years.
pub const DECADE_SECS: f64 = 60.0 * 60.0 * 24.0 * 365.0 * 10.0;

/// Cloud cover assumed when a scene reports none.
const UNKNOWN_CLOUD_COVER: f64 = 100.0;

/// Penalty for a scene captured at low tide, or with no tide reading.
pub fn low_tide_penalty() -> f64 {
    0.1_f64.sqrt()
}

/// Score a scene relative to `now`. Higher is better.
pub fn score_scene(scene: &SceneProperties, now: DateTime<Utc>) -> f64 {
    let acquired = match parse_acquired_date(&scene.acquired_date) {
        Ok(dt) => dt,
        Err(_) => return 0.0,
    };

    let baseline = if acquired.timestamp() < ARCHIVE_CUTOFF_UNIX {
        ARCHIVAL_BASELINE
    } else {
        FULL_BASELINE
    };

    baseline - cloud_penalty(scene.cloud_cover) - recency_term(acquired, now) - tide_penalty(scene)
}

/// Missing or non-finite cover counts as fully clouded.
pub fn cloud_penalty(cloud_cover: Option<f64>) -> f64 {
    let percent = cloud_cover
        .filter(|c| c.is_finite())
        .unwrap_or(UNKNOWN_CLOUD_COVER)
        .clamp(0.0, 100.0);
    (percent / 100.0).sqrt()
}

/// Acquisition offset from `now` in decades; negative for past scenes.
pub fn recency_term(acquired: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (acquired.timestamp() - now.timestamp()) as f64 / DECADE_SECS
}

pub fn tide_penalty(scene: &SceneProperties) -> f64 {
    match scene.tide() {
        Some(t)
            if t.current.is_finite()
                && t.minimum_24h.is_finite()
                && t.maximum_24h.is_finite()
                && t.maximum_24h > t.minimum_24h =>
        {
            low_tide_penalty() * (t.maximum_24h - t.current) / (t.maximum_24h - t.minimum_24h)
        }
        _ => low_tide_penalty(),
    }
}
