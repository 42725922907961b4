//! Application state for the broker API.

use std::sync::Arc;

use anyhow::{Context, Result};
use landsat_catalog::{CatalogSource, FileCatalogSource, HttpCatalogSource, SceneCatalog};
use metrics_exporter_prometheus::PrometheusHandle;
use scene_resolver::SceneResolver;
use tides::TideClient;

use crate::config::{BrokerConfig, CatalogSourceConfig};

/// Shared application state.
pub struct AppState {
    /// Collection-1 scene catalog, refreshed in the background.
    pub catalog: Arc<SceneCatalog>,

    /// Scene ID to band URL resolution over `catalog`.
    pub resolver: SceneResolver,

    /// Tide prediction client for best-scene requests.
    pub tides: TideClient,

    /// Prometheus exporter, when a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(catalog: Arc<SceneCatalog>, tides: TideClient) -> Self {
        Self {
            resolver: SceneResolver::new(Arc::clone(&catalog)),
            catalog,
            tides,
            metrics: None,
        }
    }

    /// Build state from validated configuration. The catalog starts empty.
    pub fn from_config(config: &BrokerConfig) -> Result<Self> {
        let source: Arc<dyn CatalogSource> = match &config.catalog_source {
            CatalogSourceConfig::Http { host } => Arc::new(
                HttpCatalogSource::new(Some(host.as_str()), config.fetch_timeout)
                    .context("Failed to create scene list client")?,
            ),
            CatalogSourceConfig::File { path } => Arc::new(FileCatalogSource::new(path.clone())),
        };

        let tides = TideClient::new(Some(config.tide_url.as_str()), config.tide_timeout)
            .context("Failed to create tide prediction client")?;

        Ok(Self::new(Arc::new(SceneCatalog::new(source)), tides))
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
