//! Scene identifier resolution.
//!
//! Turns a scene ID into the storage URL of each spectral band:
//! [`classify`] decides the naming convention, the Collection-1 case is
//! looked up in the [`landsat_catalog::SceneCatalog`], and [`compose`]
//! builds one URL per band.

pub mod classify;
pub mod compose;
pub mod datatype;
pub mod resolver;

pub use classify::{classify, convention_of, ClassifiedScene, IdentifierConvention};
pub use compose::compose_band_urls;
pub use datatype::LandsatDataType;
pub use resolver::{ResolvedScene, SceneResolver};
