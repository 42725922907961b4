//! HTTP client for the tide prediction service.

use std::time::Duration;

use reqwest::Client;
use scene_common::{
    parse_acquired_date, tide_dtg, BrokerError, BrokerResult, SceneProperties, TideReading,
};
use tracing::{debug, info, warn};

use crate::wire::{TideLocation, TideRequest, TideResponse};

/// Public tide prediction endpoint.
pub const DEFAULT_TIDE_URL: &str = "https://bf-tideprediction.int.geointservices.io/tides";

/// Coordinates in a response match a request within this tolerance.
const COORDINATE_TOLERANCE: f64 = 1e-6;

/// Fills scene tide fields from the tide prediction service.
#[derive(Clone)]
pub struct TideClient {
    client: Client,
    url: String,
}

impl TideClient {
    pub fn new(url: Option<&str>, timeout: Duration) -> BrokerResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BrokerError::InternalError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.unwrap_or(DEFAULT_TIDE_URL).to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Look up tides for every scene that has a bounding box and a valid
    /// acquisition date, and write them onto the scenes.
    ///
    /// Scenes without either are left untouched. Returns how many scenes
    /// were enriched; when no scene qualifies no request is sent.
    pub async fn enrich(&self, scenes: &mut [SceneProperties]) -> BrokerResult<usize> {
        let pending = tide_locations(scenes);
        if pending.is_empty() {
            debug!("No scenes eligible for tide lookup");
            return Ok(0);
        }

        let request = TideRequest {
            locations: pending.iter().map(|(_, loc)| loc.clone()).collect(),
        };
        let response = self.fetch(&request).await?;

        let mut filled = vec![false; pending.len()];
        let mut enriched = 0;
        for result in response.locations {
            let slot = pending.iter().enumerate().position(|(i, (_, loc))| {
                !filled[i]
                    && loc.dtg == result.dtg
                    && (loc.lat - result.lat).abs() < COORDINATE_TOLERANCE
                    && (loc.lon - result.lon).abs() < COORDINATE_TOLERANCE
            });

            match slot {
                Some(i) => {
                    filled[i] = true;
                    let prediction = result.results;
                    scenes[pending[i].0].apply_tide(TideReading {
                        current: prediction.current,
                        minimum_24h: prediction.minimum_24h,
                        maximum_24h: prediction.maximum_24h,
                    });
                    enriched += 1;
                }
                None => warn!(dtg = %result.dtg, "Tide result matched no requested location"),
            }
        }

        info!(requested = pending.len(), enriched, "Tide enrichment complete");
        Ok(enriched)
    }

    async fn fetch(&self, request: &TideRequest) -> BrokerResult<TideResponse> {
        debug!(url = %self.url, locations = request.locations.len(), "Requesting tide predictions");

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| BrokerError::TideServiceFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BrokerError::TideServiceFailed(format!(
                "Non-200 response code: {}",
                status.as_u16()
            )));
        }

        response
            .json::<TideResponse>()
            .await
            .map_err(|e| BrokerError::TideServiceFailed(format!("Invalid response body: {}", e)))
    }
}

/// Request location for each eligible scene, paired with its index.
fn tide_locations(scenes: &[SceneProperties]) -> Vec<(usize, TideLocation)> {
    scenes
        .iter()
        .enumerate()
        .filter_map(|(i, scene)| {
            let (lon, lat) = scene.bbox.as_ref().and_then(|b| b.centroid())?;
            let acquired = match parse_acquired_date(&scene.acquired_date) {
                Ok(dt) => dt,
                Err(_) => {
                    debug!(scene_id = %scene.scene_id, "Skipping tide lookup: bad acquisition date");
                    return None;
                }
            };
            Some((
                i,
                TideLocation {
                    lat,
                    lon,
                    dtg: tide_dtg(&acquired),
                },
            ))
        })
        .collect()
}
