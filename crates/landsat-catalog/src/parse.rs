//! Scene-list decoding.
//!
//! The list is gzip-compressed CSV. Column 0 is the band file-name prefix,
//! column 1 the scene ID, and the last column a full index-file URL whose
//! directory is the scene's storage folder. Any bad row fails the whole
//! parse; a partial catalog is never produced.

use std::collections::HashMap;
use std::io::Read;

use csv::StringRecord;
use flate2::read::GzDecoder;
use scene_common::{BrokerError, BrokerResult};

use crate::snapshot::CatalogEntry;

/// Last column of the published header line.
const HEADER_LAST_COLUMN: &str = "download_url";

const MIN_COLUMNS: usize = 3;

/// Decompress and parse a full scene list.
pub fn parse_scene_list(gz: &[u8]) -> BrokerResult<HashMap<String, CatalogEntry>> {
    parse_csv(GzDecoder::new(gz))
}

/// Parse an already-decompressed scene list.
pub fn parse_csv<R: Read>(reader: R) -> BrokerResult<HashMap<String, CatalogEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut entries = HashMap::new();
    let mut record = StringRecord::new();
    let mut index: u64 = 0;

    loop {
        let line = index + 1;
        let more = reader
            .read_record(&mut record)
            .map_err(|e| parse_error(line, e.to_string()))?;
        if !more {
            break;
        }

        if index == 0 && is_header(&record) {
            index += 1;
            continue;
        }

        let entry = parse_row(&record).map_err(|message| parse_error(line, message))?;
        // Later rows win for duplicate IDs
        entries.insert(entry.scene_id.clone(), entry);
        index += 1;
    }

    if entries.is_empty() {
        return Err(parse_error(index, "scene list contained no rows".to_string()));
    }

    Ok(entries)
}

fn is_header(record: &StringRecord) -> bool {
    record
        .iter()
        .last()
        .is_some_and(|last| last.trim() == HEADER_LAST_COLUMN)
}

fn parse_row(record: &StringRecord) -> Result<CatalogEntry, String> {
    if record.len() < MIN_COLUMNS {
        return Err(format!(
            "expected at least {} columns, found {}",
            MIN_COLUMNS,
            record.len()
        ));
    }

    let file_prefix = record[0].trim();
    let scene_id = record[1].trim();
    let url = record[record.len() - 1].trim();

    if file_prefix.is_empty() {
        return Err("empty file prefix".to_string());
    }
    if scene_id.is_empty() {
        return Err("empty scene ID".to_string());
    }

    let folder_url = folder_of(url).ok_or_else(|| format!("URL has no directory: {:?}", url))?;

    Ok(CatalogEntry {
        scene_id: scene_id.to_string(),
        folder_url: folder_url.to_string(),
        file_prefix: file_prefix.to_string(),
    })
}

/// Text up to and including the final `/`.
fn folder_of(url: &str) -> Option<&str> {
    url.rfind('/').map(|idx| &url[..=idx])
}

fn parse_error(line: u64, message: String) -> BrokerError {
    BrokerError::CatalogParseFailed { line, message }
}
