//! Error types for imagery broker services.

use thiserror::Error;

/// Result type alias using BrokerError.
pub type BrokerResult<T> = Result<T, BrokerError>;

/// Primary error type for scene resolution and selection.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BrokerError {
    // === Identifier Errors ===
    #[error("Invalid scene ID: {0}")]
    InvalidIdentifier(String),

    #[error("Scene ID {id} had a {convention} prefix but did not match the expected {convention} format")]
    MalformedIdentifier { convention: String, id: String },

    #[error("Unknown Landsat data type: {0}")]
    UnknownDataType(String),

    // === Catalog Errors ===
    #[error("Scene catalog is not ready yet")]
    CatalogNotReady,

    #[error("Scene not found with ID: {0}")]
    SceneNotFound(String),

    #[error("Failed to fetch scene list: {0}")]
    CatalogFetchFailed(String),

    #[error("Failed to parse scene list at line {line}: {message}")]
    CatalogParseFailed { line: u64, message: String },

    // === Request Errors ===
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    // === Upstream Errors ===
    #[error("Failed to retrieve tides: {0}")]
    TideServiceFailed(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl BrokerError {
    /// Build a `MalformedIdentifier` for the given convention name.
    pub fn malformed(convention: impl Into<String>, id: impl Into<String>) -> Self {
        BrokerError::MalformedIdentifier {
            convention: convention.into(),
            id: id.into(),
        }
    }

    /// Stable machine-readable code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            BrokerError::InvalidIdentifier(_) => "InvalidIdentifier",
            BrokerError::MalformedIdentifier { .. } => "MalformedIdentifier",
            BrokerError::UnknownDataType(_) => "UnknownDataType",
            BrokerError::CatalogNotReady => "CatalogNotReady",
            BrokerError::SceneNotFound(_) => "SceneNotFound",
            BrokerError::CatalogFetchFailed(_) => "CatalogFetchFailed",
            BrokerError::CatalogParseFailed { .. } => "CatalogParseFailed",
            BrokerError::MissingParameter(_) => "MissingParameterValue",
            BrokerError::InvalidParameter { .. } => "InvalidParameterValue",
            BrokerError::TideServiceFailed(_) => "TideServiceFailed",
            BrokerError::InternalError(_) => "NoApplicableCode",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            BrokerError::InvalidIdentifier(_)
            | BrokerError::MalformedIdentifier { .. }
            | BrokerError::UnknownDataType(_)
            | BrokerError::MissingParameter(_)
            | BrokerError::InvalidParameter { .. } => 400,

            BrokerError::SceneNotFound(_) => 404,

            BrokerError::CatalogFetchFailed(_) | BrokerError::TideServiceFailed(_) => 502,

            BrokerError::CatalogNotReady => 503,

            _ => 500,
        }
    }
}
