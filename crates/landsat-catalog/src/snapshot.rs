//! Immutable catalog snapshots.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Storage location of one Collection-1 scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub scene_id: String,
    /// Directory URL, always ending in `/`.
    pub folder_url: String,
    /// File-name prefix shared by every band file in the folder.
    pub file_prefix: String,
}

/// Every entry from a single refresh cycle.
///
/// Never mutated after construction; a refresh builds a new one.
#[derive(Debug)]
pub struct CatalogSnapshot {
    entries: HashMap<String, CatalogEntry>,
    refreshed_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn new(entries: HashMap<String, CatalogEntry>, refreshed_at: DateTime<Utc>) -> Self {
        Self {
            entries,
            refreshed_at,
        }
    }

    pub fn get(&self, scene_id: &str) -> Option<&CatalogEntry> {
        self.entries.get(scene_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// When the refresh that produced this snapshot completed.
    pub fn refreshed_at(&self) -> DateTime<Utc> {
        self.refreshed_at
    }
}
