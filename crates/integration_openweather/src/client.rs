//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap current-conditions and forecast
//! endpoints. Validation happens before any request is sent, so a bad
//! city name or forecast depth never reaches the network.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{CityName, ForecastDays};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use crate::config::OpenWeatherConfig;
use crate::error::WeatherApiError;
use crate::models::{
    ApiCondition, ApiCurrentResponse, ApiErrorBody, ApiForecastEntry, ApiForecastResponse,
    Condition, ForecastPoint, ForecastSeries, WeatherSnapshot,
};

/// Relative path of the current-conditions endpoint
const ENDPOINT_CURRENT: &str = "weather";

/// Relative path of the 5-day / 3-hour forecast endpoint
const ENDPOINT_FORECAST: &str = "forecast";

/// Weather provider abstraction used by the tool layer
///
/// Implementations validate their inputs up front and return typed
/// snapshots and series decoded from the provider payloads.
#[async_trait]
pub trait WeatherApi: Send + Sync {
    /// Fetch current conditions for a city
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, WeatherApiError>;

    /// Fetch a forecast for a city covering the given number of days
    async fn forecast(&self, city: &str, days: u8) -> Result<ForecastSeries, WeatherApiError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
    api_key: SecretString,
}

impl OpenWeatherClient {
    /// Create a new OpenWeatherMap client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the API key is missing, a setting
    /// is unusable, or the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, WeatherApiError> {
        config.validate().map_err(WeatherApiError::ConfigurationError)?;

        let api_key = config.api_key.clone().ok_or_else(|| {
            WeatherApiError::ConfigurationError(
                "missing OpenWeatherMap API key (set WEATHER_API_KEY)".to_string(),
            )
        })?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent("Stratus/1.0")
            .build()
            .map_err(|e| WeatherApiError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Create a new client from `WEATHER_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the environment cannot be read or
    /// the resulting configuration is unusable.
    pub fn from_env() -> Result<Self, WeatherApiError> {
        Self::new(OpenWeatherConfig::from_env()?)
    }

    /// Send a GET request to an endpoint and return the successful response
    ///
    /// The API key and language are appended here so no call site can
    /// forget them. Never log the request URL: the key rides in the query
    /// string.
    async fn send_request(
        &self,
        endpoint: &str,
        mut params: Vec<(&'static str, String)>,
    ) -> Result<reqwest::Response, WeatherApiError> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);
        params.push(("appid", self.api_key.expose_secret().to_owned()));
        params.push(("lang", self.config.language.clone()));

        debug!(endpoint, "Sending weather API request");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| self.transport_error(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| "Unknown error".to_string());
            warn!(
                endpoint,
                status = status.as_u16(),
                message = %message,
                "Weather API returned an error"
            );
            return Err(WeatherApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    /// Classify a transport failure as a timeout or a connection error
    fn transport_error(&self, endpoint: &str, error: reqwest::Error) -> WeatherApiError {
        // reqwest embeds the request URL in its Display output, which would
        // include the appid query parameter. Strip it before the error is
        // logged or stored.
        let error = error.without_url();
        if error.is_timeout() {
            let timeout_secs = self.config.timeout_secs;
            warn!(endpoint, timeout_secs, "Weather API request timed out");
            WeatherApiError::Timeout { timeout_secs }
        } else {
            warn!(endpoint, error = %error, "Failed to reach the weather API");
            WeatherApiError::ConnectionFailed(error.to_string())
        }
    }

    /// Convert a raw current-conditions response into a snapshot
    fn parse_snapshot(raw: ApiCurrentResponse) -> Result<WeatherSnapshot, WeatherApiError> {
        let observed_at = Self::parse_timestamp(raw.dt)?;
        let condition = Self::primary_condition(&raw.weather)?;
        let (country, sunrise, sunset) = match raw.sys {
            Some(sys) => (
                sys.country,
                sys.sunrise.and_then(|s| DateTime::from_timestamp(s, 0)),
                sys.sunset.and_then(|s| DateTime::from_timestamp(s, 0)),
            ),
            None => (None, None, None),
        };

        Ok(WeatherSnapshot {
            city: raw.name,
            country,
            observed_at,
            temperature: raw.main.temp,
            feels_like: raw.main.feels_like,
            temp_min: raw.main.temp_min,
            temp_max: raw.main.temp_max,
            humidity: raw.main.humidity,
            pressure: raw.main.pressure,
            wind_speed: raw.wind.as_ref().and_then(|w| w.speed),
            wind_direction: raw.wind.as_ref().and_then(|w| w.deg),
            cloudiness: raw.clouds.and_then(|c| c.all),
            visibility: raw.visibility,
            condition,
            sunrise,
            sunset,
        })
    }

    /// Convert a raw forecast response into an ordered series
    fn parse_series(raw: ApiForecastResponse) -> Result<ForecastSeries, WeatherApiError> {
        let mut points = Vec::with_capacity(raw.list.len());
        for entry in raw.list {
            points.push(Self::parse_point(entry)?);
        }

        Ok(ForecastSeries {
            city: raw.city.name,
            country: raw.city.country,
            points,
        })
    }

    /// Convert one raw forecast entry into a typed point
    fn parse_point(entry: ApiForecastEntry) -> Result<ForecastPoint, WeatherApiError> {
        let timestamp = Self::parse_timestamp(entry.dt)?;
        let condition = Self::primary_condition(&entry.weather)?;

        Ok(ForecastPoint {
            timestamp,
            temperature: entry.main.temp,
            feels_like: entry.main.feels_like,
            temp_min: entry.main.temp_min,
            temp_max: entry.main.temp_max,
            humidity: entry.main.humidity,
            wind_speed: entry.wind.and_then(|w| w.speed),
            condition,
        })
    }

    /// Parse a Unix timestamp into `DateTime<Utc>`
    fn parse_timestamp(secs: i64) -> Result<DateTime<Utc>, WeatherApiError> {
        DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| WeatherApiError::Decode(format!("timestamp out of range: {secs}")))
    }

    /// Take the leading entry of the `weather` array
    fn primary_condition(entries: &[ApiCondition]) -> Result<Condition, WeatherApiError> {
        entries
            .first()
            .map(|entry| Condition {
                category: entry.main.clone(),
                description: entry.description.clone(),
            })
            .ok_or_else(|| WeatherApiError::Decode("missing weather condition entry".to_string()))
    }
}

#[async_trait]
impl WeatherApi for OpenWeatherClient {
    #[instrument(skip(self), fields(city = %city))]
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, WeatherApiError> {
        let city = CityName::new(city).map_err(|error| {
            warn!(%error, "Rejected current weather request");
            WeatherApiError::InvalidRequest(error.to_string())
        })?;

        let params = vec![("q", city.into_inner())];
        let response = self.send_request(ENDPOINT_CURRENT, params).await?;

        let raw: ApiCurrentResponse = response.json().await.map_err(|e| {
            let error = e.without_url();
            warn!(endpoint = ENDPOINT_CURRENT, error = %error, "Malformed current weather payload");
            WeatherApiError::Decode(error.to_string())
        })?;

        Self::parse_snapshot(raw).map_err(|error| {
            warn!(endpoint = ENDPOINT_CURRENT, error = %error, "Malformed current weather payload");
            error
        })
    }

    #[instrument(skip(self), fields(city = %city, days = %days))]
    async fn forecast(&self, city: &str, days: u8) -> Result<ForecastSeries, WeatherApiError> {
        let city = CityName::new(city).map_err(|error| {
            warn!(%error, "Rejected forecast request");
            WeatherApiError::InvalidRequest(error.to_string())
        })?;
        let days = ForecastDays::new(days).map_err(|error| {
            warn!(%error, "Rejected forecast request");
            WeatherApiError::InvalidRequest(error.to_string())
        })?;

        // The endpoint returns one point per 3 hours, so a day spans 8 points.
        let params = vec![
            ("q", city.into_inner()),
            ("cnt", days.point_count().to_string()),
        ];
        let response = self.send_request(ENDPOINT_FORECAST, params).await?;

        let raw: ApiForecastResponse = response.json().await.map_err(|e| {
            let error = e.without_url();
            warn!(endpoint = ENDPOINT_FORECAST, error = %error, "Malformed forecast payload");
            WeatherApiError::Decode(error.to_string())
        })?;

        Self::parse_series(raw).map_err(|error| {
            warn!(endpoint = ENDPOINT_FORECAST, error = %error, "Malformed forecast payload");
            error
        })
    }
}
