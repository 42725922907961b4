//! Tide enrichment for candidate scenes.
//!
//! Scenes near high tide are preferred for shoreline work, so ranking
//! wants current and 24-hour min/max tide at each scene's centroid and
//! acquisition time. [`TideClient`] fetches those in one batch request.

pub mod client;
pub mod wire;

pub use client::{TideClient, DEFAULT_TIDE_URL};
pub use wire::{TideLocation, TidePrediction, TideRequest, TideResponse};
