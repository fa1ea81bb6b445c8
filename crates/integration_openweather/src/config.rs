//! OpenWeatherMap configuration

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::error::WeatherApiError;

/// Configuration for the OpenWeatherMap client
///
/// The API key is the only required setting and is read from the process
/// environment (`WEATHER_API_KEY`). Everything else carries the fixed
/// defaults the provider expects.
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API key for api.openweathermap.org (required)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Base URL for the weather API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Language code attached to every request
    #[serde(default = "default_language")]
    pub language: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            language: default_language(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OpenWeatherConfig {
    /// Load configuration from `WEATHER_*` environment variables
    ///
    /// Recognized variables: `WEATHER_API_KEY`, `WEATHER_BASE_URL`,
    /// `WEATHER_LANGUAGE`, `WEATHER_TIMEOUT_SECS`. Missing variables fall
    /// back to the defaults; a missing key is only reported once a client
    /// is constructed from the configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the environment cannot be read or
    /// a variable fails to parse.
    pub fn from_env() -> Result<Self, WeatherApiError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("WEATHER").try_parsing(true))
            .build()
            .map_err(|e| WeatherApiError::ConfigurationError(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| WeatherApiError::ConfigurationError(e.to_string()))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if a setting is unusable. The API key is
    /// checked separately at client construction.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.language.is_empty() {
            return Err("language must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl std::fmt::Debug for OpenWeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherConfig")
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
