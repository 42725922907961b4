//! Typed scene properties consumed by tide enrichment and scoring.

use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;

/// Tidal state at a scene's centroid and acquisition time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TideReading {
    pub current: f64,
    pub minimum_24h: f64,
    pub maximum_24h: f64,
}

/// Properties of one candidate scene.
///
/// Tide fields stay `None` until tide enrichment fills them; scoring
/// treats every one of them as optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneProperties {
    pub scene_id: String,
    /// Cloud cover as a percentage (0-100).
    #[serde(default)]
    pub cloud_cover: Option<f64>,
    /// Acquisition time, RFC 3339. Kept raw so a bad value scores instead of failing the request.
    #[serde(default)]
    pub acquired_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_tide: Option<f64>,
    #[serde(
        default,
        rename = "minimumTide24Hours",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_tide_24h: Option<f64>,
    #[serde(
        default,
        rename = "maximumTide24Hours",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_tide_24h: Option<f64>,
}

impl SceneProperties {
    pub fn new(scene_id: impl Into<String>, acquired_date: impl Into<String>) -> Self {
        Self {
            scene_id: scene_id.into(),
            cloud_cover: None,
            acquired_date: acquired_date.into(),
            bbox: None,
            current_tide: None,
            min_tide_24h: None,
            max_tide_24h: None,
        }
    }

    pub fn with_cloud_cover(mut self, percent: f64) -> Self {
        self.cloud_cover = Some(percent);
        self
    }

    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn with_tide(mut self, reading: TideReading) -> Self {
        self.apply_tide(reading);
        self
    }

    /// Overwrite all three tide fields from one reading.
    pub fn apply_tide(&mut self, reading: TideReading) {
        self.current_tide = Some(reading.current);
        self.min_tide_24h = Some(reading.minimum_24h);
        self.max_tide_24h = Some(reading.maximum_24h);
    }

    /// The complete tide reading, if every field is present.
    pub fn tide(&self) -> Option<TideReading> {
        Some(TideReading {
            current: self.current_tide?,
            minimum_24h: self.min_tide_24h?,
            maximum_24h: self.max_tide_24h?,
        })
    }
}

/// A scene together with the score computed for one ranking request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredScene {
    #[serde(flatten)]
    pub scene: SceneProperties,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tide_requires_all_fields() {
        let mut scene = SceneProperties::new("a", "2017-04-11T05:36:29Z");
        assert!(scene.tide().is_none());

        scene.current_tide = Some(1.0);
        scene.min_tide_24h = Some(0.0);
        assert!(scene.tide().is_none());

        scene.max_tide_24h = Some(2.0);
        assert_eq!(
            scene.tide(),
            Some(TideReading {
                current: 1.0,
                minimum_24h: 0.0,
                maximum_24h: 2.0
            })
        );
    }

    #[test]
    fn test_deserialize_tide_property_names() {
        let json = r#"{
            "sceneId": "LC80060522017107LGN00",
            "cloudCover": 12.5,
            "acquiredDate": "2017-04-17T15:00:00Z",
            "bbox": [-1.0, -1.0, 1.0, 1.0],
            "currentTide": 0.4,
            "minimumTide24Hours": -0.2,
            "maximumTide24Hours": 1.1
        }"#;
        let scene: SceneProperties = serde_json::from_str(json).unwrap();
        assert_eq!(scene.cloud_cover, Some(12.5));
        assert_eq!(scene.bbox, Some(BoundingBox::new(-1.0, -1.0, 1.0, 1.0)));
        assert_eq!(scene.min_tide_24h, Some(-0.2));
        assert_eq!(scene.max_tide_24h, Some(1.1));
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let scene: SceneProperties = serde_json::from_str(r#"{"sceneId": "x"}"#).unwrap();
        assert_eq!(scene.cloud_cover, None);
        assert_eq!(scene.acquired_date, "");
        assert!(scene.tide().is_none());
    }
}
