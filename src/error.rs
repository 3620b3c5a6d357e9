//! Error types shared across the crate

use thiserror::Error;

/// Failures talking to the search backend.
///
/// Every variant is a transport/parse failure from the user's point of view:
/// the presenter shows one generic message for all of them and logs the
/// variant's detail. An application-level failure (`success: false`) is not an
/// `ApiError`; it arrives as a successfully decoded response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, reset mid-body, ...
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not the JSON shape we expect
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Invalid configuration values
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key} (expected {expected})")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}
