//! Scene resolution: classify, look up if needed, compose.

use std::sync::Arc;

use landsat_catalog::SceneCatalog;
use scene_common::{BandSet, BrokerError, BrokerResult};
use serde::Serialize;
use tracing::debug;

use crate::classify::{classify, ClassifiedScene, IdentifierConvention, LANDSAT};
use crate::compose::{compose_band_urls, legacy_landsat_folder};
use crate::datatype::LandsatDataType;

/// A scene ID with the storage URL of every band.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedScene {
    pub scene_id: String,
    pub convention: IdentifierConvention,
    pub bands: BandSet,
}

/// Resolves scene IDs of any convention to band URLs.
///
/// Only Collection-1 scenes touch the catalog; legacy Landsat and
/// Sentinel-2 scenes resolve from the ID alone and work before the
/// catalog is ready.
#[derive(Clone)]
pub struct SceneResolver {
    catalog: Arc<SceneCatalog>,
}

impl SceneResolver {
    pub fn new(catalog: Arc<SceneCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<SceneCatalog> {
        &self.catalog
    }

    /// Resolve a scene ID, optionally qualified by a Landsat data type.
    ///
    /// Pre-Collection-1 data types force the legacy template, which needs a
    /// legacy-shaped ID. Collection-1 data types force a catalog lookup.
    /// An empty data type is the same as none.
    pub fn resolve(&self, scene_id: &str, data_type: Option<&str>) -> BrokerResult<ResolvedScene> {
        let data_type = data_type
            .filter(|s| !s.trim().is_empty())
            .map(str::parse::<LandsatDataType>)
            .transpose()?;

        let mut scene = classify(scene_id)?;
        if let Some(data_type) = data_type {
            scene = apply_data_type(scene, data_type)?;
        }

        let entry = match &scene {
            ClassifiedScene::CollectionOneLandsat { scene_id } => {
                Some(self.catalog.lookup(scene_id)?)
            }
            _ => None,
        };
        let bands = compose_band_urls(&scene, entry.as_ref())?;

        debug!(
            scene_id = %scene.scene_id(),
            convention = %scene.convention(),
            "Resolved scene bands"
        );

        Ok(ResolvedScene {
            scene_id: scene.scene_id().to_string(),
            convention: scene.convention(),
            bands,
        })
    }

    /// Storage folder of a Landsat scene, ending in `/`.
    pub fn scene_folder_url(&self, scene_id: &str) -> BrokerResult<String> {
        match classify(scene_id)? {
            ClassifiedScene::LegacyLandsat {
                scene_id,
                path,
                row,
            } => Ok(legacy_landsat_folder(&path, &row, &scene_id)),
            ClassifiedScene::CollectionOneLandsat { scene_id } => {
                Ok(self.catalog.lookup(&scene_id)?.folder_url)
            }
            ClassifiedScene::Sentinel2 { .. } => Err(BrokerError::InvalidParameter {
                param: "sceneId".to_string(),
                message: "folder lookup is only available for Landsat scenes".to_string(),
            }),
        }
    }
}

fn apply_data_type(
    scene: ClassifiedScene,
    data_type: LandsatDataType,
) -> BrokerResult<ClassifiedScene> {
    match scene {
        ClassifiedScene::Sentinel2 { .. } => Err(BrokerError::InvalidParameter {
            param: "dataType".to_string(),
            message: format!("{} applies only to Landsat scenes", data_type),
        }),
        ClassifiedScene::CollectionOneLandsat { scene_id } if data_type.is_pre_collection() => {
            Err(BrokerError::malformed(LANDSAT, scene_id))
        }
        ClassifiedScene::LegacyLandsat { scene_id, .. } if data_type.is_collection_one() => {
            Ok(ClassifiedScene::CollectionOneLandsat { scene_id })
        }
        scene => Ok(scene),
    }
}
