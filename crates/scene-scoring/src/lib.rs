//! Best-scene selection.
//!
//! Every function takes `now` explicitly so scores are reproducible.

pub mod score;
pub mod select;

pub use score::{score_scene, ARCHIVE_CUTOFF_UNIX, DECADE_SECS};
pub use select::{rank_scenes, select_best};
