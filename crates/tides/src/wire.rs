//! Tide prediction service request and response bodies.

use serde::{Deserialize, Serialize};

/// One point and time to predict tides for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TideLocation {
    pub lat: f64,
    pub lon: f64,
    /// `YYYY-MM-DD-HH-MM`, UTC
    pub dtg: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TideRequest {
    pub locations: Vec<TideLocation>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TidePrediction {
    #[serde(rename = "currentTide")]
    pub current: f64,
    #[serde(rename = "minimumTide24Hours")]
    pub minimum_24h: f64,
    #[serde(rename = "maximumTide24Hours")]
    pub maximum_24h: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TideLocationResult {
    pub lat: f64,
    pub lon: f64,
    pub dtg: String,
    pub results: TidePrediction,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TideResponse {
    #[serde(default)]
    pub locations: Vec<TideLocationResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = TideRequest {
            locations: vec![TideLocation {
                lat: 30.28,
                lon: 73.63,
                dtg: "2017-04-11-05-36".to_string(),
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["locations"][0]["dtg"], "2017-04-11-05-36");
        assert_eq!(json["locations"][0]["lat"], 30.28);
    }

    #[test]
    fn test_response_parses() {
        let body = r#"{"locations":[{"lat":1.5,"lon":2.5,"dtg":"2017-04-11-05-36",
            "results":{"minimumTide24Hours":-0.5,"maximumTide24Hours":1.25,"currentTide":0.75}}]}"#;
        let response: TideResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.locations.len(), 1);
        assert_eq!(response.locations[0].results.maximum_24h, 1.25);
        assert_eq!(response.locations[0].results.current, 0.75);
    }
}
