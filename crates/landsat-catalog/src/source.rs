//! Where the compressed scene list comes from.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, StatusCode};
use scene_common::{BrokerError, BrokerResult};
use tracing::debug;

/// Public bucket hosting the Landsat 8 scene list.
pub const DEFAULT_LANDSAT_HOST: &str = "http://landsat-pds.s3.amazonaws.com";

/// Path of the Collection-1 scene list below the host.
const SCENE_LIST_PATH: &str = "/c1/L8/scene_list.gz";

/// A source of gzip-compressed scene-list bytes.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full compressed scene list.
    async fn fetch(&self) -> BrokerResult<Bytes>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Fetches `<host>/c1/L8/scene_list.gz` over HTTP.
pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    /// Create a source for the given host (`None` uses the public bucket).
    pub fn new(host: Option<&str>, timeout: Duration) -> BrokerResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| BrokerError::InternalError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: Self::scene_list_url(host.unwrap_or(DEFAULT_LANDSAT_HOST)),
        })
    }

    /// Full scene-list URL for a host.
    pub fn scene_list_url(host: &str) -> String {
        format!("{}{}", host.trim_end_matches('/'), SCENE_LIST_PATH)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> BrokerResult<Bytes> {
        debug!(url = %self.url, "Fetching scene list");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| BrokerError::CatalogFetchFailed(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(BrokerError::CatalogFetchFailed(format!(
                "Non-200 response code: {}",
                status.as_u16()
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| BrokerError::CatalogFetchFailed(e.to_string()))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads a scene list from a local gzip file.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> BrokerResult<Bytes> {
        tokio::fs::read(&self.path).await.map(Bytes::from).map_err(|e| {
            BrokerError::CatalogFetchFailed(format!("{}: {}", self.path.display(), e))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
