//! Scene identifier classification.
//!
//! Three naming conventions are recognized:
//!
//! - Legacy Landsat 8: `LC8` + path(3) + row(3) + year(4) + day-of-year(3)
//!   + ground station(3) + version(2), e.g. `LC80060522017107LGN00`.
//! - Collection-1 Landsat: underscore-delimited fields starting with a
//!   sensor letter and two-digit mission, e.g.
//!   `LC08_L1TP_012029_20170213_20170415_01_T1`. Storage location comes
//!   from the scene catalog, not the ID.
//! - Sentinel-2 L1C: `S2A_MSIL1C_20160513T183921_N0204_R070_T11SKD_...`,
//!   carrying acquisition date and MGRS tile.
//!
//! An ID that starts like one of these but fails the full pattern is
//! malformed; anything else is invalid.

use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use scene_common::{BrokerError, BrokerResult};
use serde::Serialize;

/// Convention name used in malformed-Landsat errors.
pub const LANDSAT: &str = "Landsat";

/// Convention name used in malformed-Sentinel errors.
pub const SENTINEL_2: &str = "Sentinel-2";

const LEGACY_LANDSAT_PREFIX: &str = "LC8";
const SENTINEL_2_PREFIXES: [&str; 2] = ["S2A", "S2B"];

static LEGACY_LANDSAT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^LC8(\d{3})(\d{3})\d{4}\d{3}[A-Z]{3}\d{2}$").expect("legacy Landsat pattern")
});

static COLLECTION_ONE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^L[COTEM]0[1-9]_").expect("Collection-1 prefix pattern"));

static COLLECTION_ONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^L[COTEM]0[1-9]_L1(?:TP|GT|GS)_\d{6}_\d{8}_\d{8}_\d{2}_(?:RT|T1|T2)$")
        .expect("Collection-1 pattern")
});

static SENTINEL_2_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^S2[AB]_MSIL1C_(\d{4})(\d{2})(\d{2})T\d+_[A-Z0-9]+_[A-Z0-9]+_T(\d+)([A-Z])([A-Z]+)_\d{8}T\d+(?:\.SAFE)?$",
    )
    .expect("Sentinel-2 pattern")
});

/// Which naming convention an identifier follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IdentifierConvention {
    LegacyLandsat,
    CollectionOneLandsat,
    Sentinel2,
    Invalid,
}

impl fmt::Display for IdentifierConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IdentifierConvention::LegacyLandsat => "LegacyLandsat",
            IdentifierConvention::CollectionOneLandsat => "CollectionOneLandsat",
            IdentifierConvention::Sentinel2 => "Sentinel2",
            IdentifierConvention::Invalid => "Invalid",
        };
        f.write_str(name)
    }
}

/// A scene ID together with the fields its convention encodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedScene {
    /// Path and row are kept as their zero-padded three-digit text.
    LegacyLandsat {
        scene_id: String,
        path: String,
        row: String,
    },
    CollectionOneLandsat {
        scene_id: String,
    },
    /// MGRS components are kept exactly as written in the ID.
    Sentinel2 {
        scene_id: String,
        year: i32,
        month: u32,
        day: u32,
        utm_zone: String,
        latitude_band: String,
        grid_square: String,
    },
}

impl ClassifiedScene {
    pub fn scene_id(&self) -> &str {
        match self {
            ClassifiedScene::LegacyLandsat { scene_id, .. }
            | ClassifiedScene::CollectionOneLandsat { scene_id }
            | ClassifiedScene::Sentinel2 { scene_id, .. } => scene_id,
        }
    }

    pub fn convention(&self) -> IdentifierConvention {
        match self {
            ClassifiedScene::LegacyLandsat { .. } => IdentifierConvention::LegacyLandsat,
            ClassifiedScene::CollectionOneLandsat { .. } => {
                IdentifierConvention::CollectionOneLandsat
            }
            ClassifiedScene::Sentinel2 { .. } => IdentifierConvention::Sentinel2,
        }
    }
}

/// Classify a scene ID and extract the fields its convention carries.
///
/// Returns `MalformedIdentifier` when the ID has a recognized prefix but
/// fails the full pattern, and `InvalidIdentifier` when no prefix matches.
pub fn classify(scene_id: &str) -> BrokerResult<ClassifiedScene> {
    if scene_id.starts_with(LEGACY_LANDSAT_PREFIX) {
        return classify_legacy_landsat(scene_id);
    }
    if COLLECTION_ONE_PREFIX.is_match(scene_id) {
        return classify_collection_one(scene_id);
    }
    if SENTINEL_2_PREFIXES.iter().any(|p| scene_id.starts_with(p)) {
        return classify_sentinel_2(scene_id);
    }
    Err(BrokerError::InvalidIdentifier(scene_id.to_string()))
}

/// Total classification: every string maps to exactly one convention.
pub fn convention_of(scene_id: &str) -> IdentifierConvention {
    classify(scene_id)
        .map(|scene| scene.convention())
        .unwrap_or(IdentifierConvention::Invalid)
}

fn classify_legacy_landsat(scene_id: &str) -> BrokerResult<ClassifiedScene> {
    let caps = LEGACY_LANDSAT_PATTERN
        .captures(scene_id)
        .ok_or_else(|| BrokerError::malformed(LANDSAT, scene_id))?;

    Ok(ClassifiedScene::LegacyLandsat {
        scene_id: scene_id.to_string(),
        path: caps[1].to_string(),
        row: caps[2].to_string(),
    })
}

fn classify_collection_one(scene_id: &str) -> BrokerResult<ClassifiedScene> {
    if !COLLECTION_ONE_PATTERN.is_match(scene_id) {
        return Err(BrokerError::malformed(LANDSAT, scene_id));
    }
    Ok(ClassifiedScene::CollectionOneLandsat {
        scene_id: scene_id.to_string(),
    })
}

fn classify_sentinel_2(scene_id: &str) -> BrokerResult<ClassifiedScene> {
    let malformed = || BrokerError::malformed(SENTINEL_2, scene_id);
    let caps = SENTINEL_2_PATTERN.captures(scene_id).ok_or_else(malformed)?;

    let year: i32 = caps[1].parse().map_err(|_| malformed())?;
    let month: u32 = caps[2].parse().map_err(|_| malformed())?;
    let day: u32 = caps[3].parse().map_err(|_| malformed())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)?;

    Ok(ClassifiedScene::Sentinel2 {
        scene_id: scene_id.to_string(),
        year,
        month,
        day,
        utm_zone: caps[4].to_string(),
        latitude_band: caps[5].to_string(),
        grid_square: caps[6].to_string(),
    })
}
