//! Error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use scene_common::BrokerError;
use serde::Serialize;
use tracing::warn;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

/// A [`BrokerError`] rendered as a JSON response with its HTTP status.
#[derive(Debug)]
pub struct ApiError(pub BrokerError);

impl From<BrokerError> for ApiError {
    fn from(err: BrokerError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            warn!(error = %self.0, code = self.0.error_code(), "Request failed");
        }

        let body = ErrorBody {
            error: self.0.to_string(),
            code: self.0.error_code(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_follows_error_kind() {
        let cases = [
            (BrokerError::InvalidIdentifier("x".into()), StatusCode::BAD_REQUEST),
            (BrokerError::SceneNotFound("x".into()), StatusCode::NOT_FOUND),
            (BrokerError::CatalogNotReady, StatusCode::SERVICE_UNAVAILABLE),
            (BrokerError::TideServiceFailed("x".into()), StatusCode::BAD_GATEWAY),
            (BrokerError::InternalError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError(err).into_response().status(), expected);
        }
    }
}
