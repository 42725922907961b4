//! Per-band storage URL composition.
//!
//! Every composer walks the full band vocabulary, so each produces
//! exactly one URL per band.

use landsat_catalog::CatalogEntry;
use scene_common::{Band, BandSet, BrokerError, BrokerResult};

use crate::classify::ClassifiedScene;

/// Root of the legacy Landsat 8 layout (`/<path>/<row>/<id>/`).
pub const LEGACY_LANDSAT_ROOT: &str = "https://landsat-pds.s3.amazonaws.com/L8";

/// Root of the Sentinel-2 L1C tile layout.
pub const SENTINEL_2_ROOT: &str = "http://sentinel-s2-l1c.s3.amazonaws.com/tiles";

/// Landsat band file suffix, appended to the scene's file prefix.
pub fn landsat_band_suffix(band: Band) -> &'static str {
    match band {
        Band::Coastal => "_B1.TIF",
        Band::Blue => "_B2.TIF",
        Band::Green => "_B3.TIF",
        Band::Red => "_B4.TIF",
        Band::Nir => "_B5.TIF",
        Band::Swir1 => "_B6.TIF",
        Band::Swir2 => "_B7.TIF",
        Band::Panchromatic => "_B8.TIF",
        Band::Cirrus => "_B9.TIF",
        Band::Tirs1 => "_B10.TIF",
        Band::Tirs2 => "_B11.TIF",
    }
}

/// Sentinel-2 band file name inside a tile folder.
pub fn sentinel_band_filename(band: Band) -> &'static str {
    match band {
        Band::Coastal => "B01.jp2",
        Band::Blue => "B02.jp2",
        Band::Green => "B03.jp2",
        Band::Red => "B04.jp2",
        Band::Nir => "B05.jp2",
        Band::Swir1 => "B06.jp2",
        Band::Swir2 => "B07.jp2",
        Band::Panchromatic => "B08.jp2",
        Band::Cirrus => "B09.jp2",
        Band::Tirs1 => "B10.jp2",
        Band::Tirs2 => "B11.jp2",
    }
}

/// Storage folder of a legacy Landsat scene, with trailing separator.
pub fn legacy_landsat_folder(path: &str, row: &str, scene_id: &str) -> String {
    format!("{}/{}/{}/{}/", LEGACY_LANDSAT_ROOT, path, row, scene_id)
}

/// Tile folder of a Sentinel-2 scene.
///
/// Month and day are written without zero padding, matching the bucket.
pub fn sentinel_tile_folder(
    utm_zone: &str,
    latitude_band: &str,
    grid_square: &str,
    year: i32,
    month: u32,
    day: u32,
) -> String {
    format!(
        "{}/{}/{}/{}/{}/{}/{}/0/",
        SENTINEL_2_ROOT, utm_zone, latitude_band, grid_square, year, month, day
    )
}

pub fn compose_legacy_landsat(path: &str, row: &str, scene_id: &str) -> BandSet {
    let folder = legacy_landsat_folder(path, row, scene_id);
    BandSet::from_fn(|band| format!("{}{}{}", folder, scene_id, landsat_band_suffix(band)))
}

pub fn compose_collection_one(entry: &CatalogEntry) -> BandSet {
    BandSet::from_fn(|band| {
        format!(
            "{}{}{}",
            entry.folder_url,
            entry.file_prefix,
            landsat_band_suffix(band)
        )
    })
}

pub fn compose_sentinel_2(
    utm_zone: &str,
    latitude_band: &str,
    grid_square: &str,
    year: i32,
    month: u32,
    day: u32,
) -> BandSet {
    let folder = sentinel_tile_folder(utm_zone, latitude_band, grid_square, year, month, day);
    BandSet::from_fn(|band| format!("{}{}", folder, sentinel_band_filename(band)))
}

/// Compose band URLs for a classified scene.
///
/// Collection-1 scenes need their catalog entry; without one the scene
/// cannot be located and `SceneNotFound` is returned.
pub fn compose_band_urls(
    scene: &ClassifiedScene,
    entry: Option<&CatalogEntry>,
) -> BrokerResult<BandSet> {
    match scene {
        ClassifiedScene::LegacyLandsat {
            scene_id,
            path,
            row,
        } => Ok(compose_legacy_landsat(path, row, scene_id)),
        ClassifiedScene::CollectionOneLandsat { scene_id } => entry
            .map(compose_collection_one)
            .ok_or_else(|| BrokerError::SceneNotFound(scene_id.clone())),
        ClassifiedScene::Sentinel2 {
            year,
            month,
            day,
            utm_zone,
            latitude_band,
            grid_square,
            ..
        } => Ok(compose_sentinel_2(
            utm_zone,
            latitude_band,
            grid_square,
            *year,
            *month,
            *day,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use test_utils::fixtures::{scene_ids, scene_list};

    fn sample_entry() -> CatalogEntry {
        CatalogEntry {
            scene_id: scene_ids::COLLECTION_ONE.to_string(),
            folder_url: scene_list::SAMPLE_FOLDER.to_string(),
            file_prefix: scene_list::SAMPLE_PREFIX.to_string(),
        }
    }

    #[test]
    fn test_legacy_red_band() {
        let scene = classify(scene_ids::LEGACY_LANDSAT).unwrap();
        let bands = compose_band_urls(&scene, None).unwrap();
        assert_eq!(
            bands.get(Band::Red),
            Some("https://landsat-pds.s3.amazonaws.com/L8/006/052/LC80060522017107LGN00/LC80060522017107LGN00_B4.TIF")
        );
        assert!(bands
            .get(Band::Tirs2)
            .unwrap()
            .ends_with("LC80060522017107LGN00_B11.TIF"));
    }

    #[test]
    fn test_collection_one_uses_catalog_entry() {
        let scene = classify(scene_ids::COLLECTION_ONE).unwrap();
        let bands = compose_band_urls(&scene, Some(&sample_entry())).unwrap();
        assert_eq!(
            bands.get(Band::Coastal),
            Some("https://s3-us-west-2.fakeamazonaws.dummy/thisiscorrect/LC81490392017101LGN00_B1.TIF")
        );
    }

    #[test]
    fn test_collection_one_without_entry_fails() {
        let scene = classify(scene_ids::COLLECTION_ONE).unwrap();
        assert_eq!(
            compose_band_urls(&scene, None),
            Err(BrokerError::SceneNotFound(scene_ids::COLLECTION_ONE.to_string()))
        );
    }

    #[test]
    fn test_sentinel_tile_path() {
        let scene = classify(scene_ids::SENTINEL_2).unwrap();
        let bands = compose_band_urls(&scene, None).unwrap();
        assert_eq!(
            bands.get(Band::Red),
            Some("http://sentinel-s2-l1c.s3.amazonaws.com/tiles/11/S/KD/2016/5/13/0/B04.jp2")
        );
    }

    #[test]
    fn test_sentinel_month_and_day_unpadded() {
        let scene = classify(scene_ids::SENTINEL_2_EARLY_MONTH).unwrap();
        let bands = compose_band_urls(&scene, None).unwrap();
        assert!(bands
            .get(Band::Nir)
            .unwrap()
            .ends_with("/tiles/35/T/LF/2017/2/5/0/B05.jp2"));
    }

    #[test]
    fn test_every_convention_yields_full_vocabulary() {
        let entry = sample_entry();
        for id in [
            scene_ids::LEGACY_LANDSAT,
            scene_ids::COLLECTION_ONE,
            scene_ids::SENTINEL_2,
        ] {
            let scene = classify(id).unwrap();
            let bands = compose_band_urls(&scene, Some(&entry)).unwrap();
            assert_eq!(bands.len(), Band::ALL.len(), "{id}");
            for band in Band::ALL {
                assert!(bands.get(band).is_some(), "{id} missing {band}");
            }
        }
    }

    #[test]
    fn test_suffix_tables_are_distinct() {
        let mut suffixes: Vec<_> = Band::ALL.iter().map(|b| landsat_band_suffix(*b)).collect();
        suffixes.sort_unstable();
        suffixes.dedup();
        assert_eq!(suffixes.len(), 11);
        let mut filenames: Vec<_> = Band::ALL.iter().map(|b| sentinel_band_filename(*b)).collect();
        filenames.sort_unstable();
        filenames.dedup();
        assert_eq!(filenames.len(), 11);
    }
}
