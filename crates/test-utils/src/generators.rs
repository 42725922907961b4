//! Test data generators for catalog payloads and candidate scenes.

use std::io::Write;

use chrono::{DateTime, Utc};
use flate2::write::GzEncoder;
use flate2::Compression;
use scene_common::{SceneProperties, TideReading};
use tempfile::NamedTempFile;

use crate::fixtures;

/// Gzip-compress a text payload.
pub fn gzip_bytes(text: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(text.as_bytes())
        .expect("writing to an in-memory encoder cannot fail");
    encoder
        .finish()
        .expect("finishing an in-memory encoder cannot fail")
}

/// Join rows with newlines and gzip them, as `scene_list.gz` is served.
pub fn scene_list_gz(rows: &[&str]) -> Vec<u8> {
    let mut text = rows.join("\n");
    text.push('\n');
    gzip_bytes(&text)
}

/// Creates a scene list with `count` synthetic rows.
///
/// Row `i` maps scene ID `LC08_L1TP_{i:06}_20170101_20170101_01_T1` to
/// prefix `LC8{i:06}2017001LGN00` and folder `https://bucket.test/{i}/`.
pub fn synthetic_scene_list(count: usize) -> String {
    let mut text = String::new();
    for i in 0..count {
        text.push_str(&format!(
            "LC8{i:06}2017001LGN00,{},2017-01-01 00:00:00,0.0,L1TP,1,1,0,0,0,0,https://bucket.test/{i}/index.html\n",
            synthetic_scene_id(i)
        ));
    }
    text
}

/// Scene ID of row `i` in [`synthetic_scene_list`].
pub fn synthetic_scene_id(i: usize) -> String {
    format!("LC08_L1TP_{i:06}_20170101_20170101_01_T1")
}

/// Write a gzip payload to a temporary file.
pub fn scene_list_file(gz: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(gz).expect("failed to write temp file");
    file.flush().expect("failed to flush temp file");
    file
}

/// The fixed "now" used by scoring tests.
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(fixtures::time::NOW)
        .expect("fixture date is valid")
        .with_timezone(&Utc)
}

/// A candidate scene with the given cloud cover and acquisition date.
pub fn candidate(id: &str, cloud_cover: f64, acquired: &str) -> SceneProperties {
    SceneProperties::new(id, acquired).with_cloud_cover(cloud_cover)
}

/// A candidate scene carrying a full tide reading.
pub fn candidate_with_tide(
    id: &str,
    cloud_cover: f64,
    acquired: &str,
    current: f64,
    minimum_24h: f64,
    maximum_24h: f64,
) -> SceneProperties {
    candidate(id, cloud_cover, acquired).with_tide(TideReading {
        current,
        minimum_24h,
        maximum_24h,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    #[test]
    fn test_gzip_round_trip() {
        let gz = scene_list_gz(&[fixtures::scene_list::SAMPLE_ROW]);
        let mut text = String::new();
        GzDecoder::new(gz.as_slice())
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, fixtures::scene_list::SAMPLE_CSV);
    }

    #[test]
    fn test_synthetic_scene_list_row_count() {
        let text = synthetic_scene_list(5);
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains(&synthetic_scene_id(4)));
    }
}
