//! Common types and utilities shared across the imagery broker crates.

pub mod band;
pub mod bbox;
pub mod error;
pub mod scene;
pub mod time;

pub use band::{Band, BandSet};
pub use bbox::BoundingBox;
pub use error::{BrokerError, BrokerResult};
pub use scene::{SceneProperties, ScoredScene, TideReading};
pub use time::{parse_acquired_date, tide_dtg};
