//! Landsat Collection-1 scene catalog.
//!
//! Collection-1 scene IDs carry no storage location, so they are resolved
//! through the published `scene_list.gz`. This crate keeps an in-memory
//! snapshot of that list:
//!
//! - [`CatalogSource`] fetches the compressed list (HTTP or local file)
//! - [`parse_scene_list`] turns it into a complete map, or fails as a whole
//! - [`SceneCatalog`] swaps in each new snapshot atomically; lookups never lock
//! - [`spawn_periodic_refresh`] keeps it current for the life of the process

pub mod cache;
pub mod parse;
pub mod scheduler;
pub mod snapshot;
pub mod source;

pub use cache::{RefreshSummary, SceneCatalog};
pub use parse::parse_scene_list;
pub use scheduler::{run_periodic_refresh, spawn_periodic_refresh};
pub use snapshot::{CatalogEntry, CatalogSnapshot};
pub use source::{CatalogSource, FileCatalogSource, HttpCatalogSource, DEFAULT_LANDSAT_HOST};
