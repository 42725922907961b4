//! Spectral band vocabulary and per-band URL sets.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One spectral channel of a scene.
///
/// The vocabulary is fixed; every convention maps all of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Coastal,
    Blue,
    Green,
    Red,
    Nir,
    Swir1,
    Swir2,
    Panchromatic,
    Cirrus,
    Tirs1,
    Tirs2,
}

impl Band {
    /// Every band, in sensor order.
    pub const ALL: [Band; 11] = [
        Band::Coastal,
        Band::Blue,
        Band::Green,
        Band::Red,
        Band::Nir,
        Band::Swir1,
        Band::Swir2,
        Band::Panchromatic,
        Band::Cirrus,
        Band::Tirs1,
        Band::Tirs2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Coastal => "coastal",
            Band::Blue => "blue",
            Band::Green => "green",
            Band::Red => "red",
            Band::Nir => "nir",
            Band::Swir1 => "swir1",
            Band::Swir2 => "swir2",
            Band::Panchromatic => "panchromatic",
            Band::Cirrus => "cirrus",
            Band::Tirs1 => "tirs1",
            Band::Tirs2 => "tirs2",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully-qualified URL for every band of one scene.
///
/// Only constructible from a function that yields a URL for each band,
/// so a `BandSet` always holds exactly the full vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BandSet(BTreeMap<Band, String>);

impl BandSet {
    /// Build the set by asking `url_for` once per band.
    pub fn from_fn<F>(mut url_for: F) -> Self
    where
        F: FnMut(Band) -> String,
    {
        Self(Band::ALL.iter().map(|&band| (band, url_for(band))).collect())
    }

    pub fn get(&self, band: Band) -> Option<&str> {
        self.0.get(&band).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Band, &str)> {
        self.0.iter().map(|(band, url)| (*band, url.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
