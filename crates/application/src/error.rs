//! Tool-layer errors

use domain::{InvalidDistance, InvalidTemperature};
use integration_openweather::WeatherApiError;
use thiserror::Error;

/// Errors surfaced to the agent shell by the weather tools
///
/// Every failure keeps its classification from the layer it arose in, so
/// the shell can phrase a suggestion that fits the cause (fix the input,
/// fix the configuration, try again later).
#[derive(Debug, Error)]
pub enum ToolError {
    /// Input was rejected before any request was made
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The tool layer is not configured correctly
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The weather provider answered with an error status
    #[error("Weather API error {status}: {message}")]
    Provider {
        /// HTTP status code returned by the provider
        status: u16,
        /// Provider-supplied message, or "Unknown error"
        message: String,
    },

    /// The weather provider could not be reached
    #[error("Connection failed: {0}")]
    Transport(String),

    /// The weather provider did not answer within the request budget
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The budget that elapsed, in seconds
        timeout_secs: u64,
    },

    /// A provider payload did not match the expected schema
    #[error("Malformed weather payload: {0}")]
    Decode(String),
}

impl ToolError {
    /// Check if this error is worth retrying later
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout { .. })
    }

    /// Check if this error was caused by the caller's input
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<WeatherApiError> for ToolError {
    fn from(err: WeatherApiError) -> Self {
        match err {
            WeatherApiError::InvalidRequest(msg) => Self::Validation(msg),
            WeatherApiError::ConfigurationError(msg) => Self::Configuration(msg),
            WeatherApiError::Api { status, message } => Self::Provider { status, message },
            WeatherApiError::ConnectionFailed(msg) => Self::Transport(msg),
            WeatherApiError::Timeout { timeout_secs } => Self::Timeout { timeout_secs },
            WeatherApiError::Decode(msg) => Self::Decode(msg),
        }
    }
}

impl From<InvalidTemperature> for ToolError {
    fn from(err: InvalidTemperature) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<InvalidDistance> for ToolError {
    fn from(err: InvalidDistance) -> Self {
        Self::Validation(err.to_string())
    }
}
