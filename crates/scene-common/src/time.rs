//! Acquisition-time helpers.

use chrono::{DateTime, Utc};

/// Parse a scene acquisition date (RFC 3339) into UTC.
pub fn parse_acquired_date(s: &str) -> Result<DateTime<Utc>, TimeParseError> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| TimeParseError::InvalidFormat(s.to_string()))
}

/// Date-time group as the tide prediction service expects it: `YYYY-MM-DD-HH-MM`.
pub fn tide_dtg(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d-%H-%M").to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum TimeParseError {
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),
}
