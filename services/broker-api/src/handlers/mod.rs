//! HTTP request handlers for the broker API.
//!
//! - `health`: liveness, readiness and Prometheus metrics
//! - `catalog`: scene catalog status
//! - `scenes`: scene resolution and best-scene selection

pub mod catalog;
pub mod error;
pub mod health;
pub mod scenes;

pub use error::ApiError;
