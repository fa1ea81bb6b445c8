//! Weather API error types

use thiserror::Error;

/// Errors raised by the weather provider client
///
/// Each variant maps to one failure class so callers can phrase accurate
/// guidance: bad input never reaches the network, a missing credential is
/// not a provider rejection, and an unreachable service is not a bad city
/// name.
#[derive(Debug, Error)]
pub enum WeatherApiError {
    /// Caller input rejected before any request was issued
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Credential or client configuration problem, detected before first use
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The provider answered with a non-success status
    #[error("Weather API error {status}: {message}")]
    Api {
        /// HTTP status code returned by the provider
        status: u16,
        /// Message text from the provider's error body
        message: String,
    },

    /// Connection to the weather service could not be established
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request exceeded the configured time budget
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// A success response carried a body that does not match the schema
    #[error("Malformed weather payload: {0}")]
    Decode(String),
}

impl WeatherApiError {
    /// Returns true if the failure happened on the wire rather than in
    /// either party's logic
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::Timeout { .. })
    }

    /// Returns true if the caller supplied unusable input
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}
