//! Weather data models
//!
//! Typed representations of the OpenWeatherMap current-conditions and
//! forecast payloads, plus the raw wire structs they are decoded from.
//! Temperatures stay in Kelvin as delivered by the provider; conversion
//! happens where values are shown to people.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weather condition reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Coarse category, e.g. "Clear", "Rain", "Clouds"
    pub category: String,
    /// Free-text detail, e.g. "light rain"
    pub description: String,
}

impl Condition {
    /// Description with its first letter upper-cased for display
    #[must_use]
    pub fn display_description(&self) -> String {
        let mut chars = self.description.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().collect::<String>() + chars.as_str()
        })
    }
}

/// Current conditions for one location at one instant
///
/// Immutable once decoded; every field mirrors what the provider sent
/// for the single observation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// City name as resolved by the provider
    pub city: String,
    /// ISO country code, when the provider knows it
    pub country: Option<String>,
    /// Observation time (UTC)
    pub observed_at: DateTime<Utc>,
    /// Temperature in Kelvin
    pub temperature: f64,
    /// Apparent (feels like) temperature in Kelvin
    pub feels_like: f64,
    /// Low end of the observed temperature spread in Kelvin
    pub temp_min: f64,
    /// High end of the observed temperature spread in Kelvin
    pub temp_max: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Atmospheric pressure in hPa
    pub pressure: Option<u32>,
    /// Wind speed in m/s
    pub wind_speed: Option<f64>,
    /// Wind direction in degrees (0-360)
    pub wind_direction: Option<u16>,
    /// Cloud cover percentage (0-100)
    pub cloudiness: Option<u8>,
    /// Visibility in meters
    pub visibility: Option<u32>,
    /// Condition category and description
    pub condition: Condition,
    /// Sunrise time (UTC)
    pub sunrise: Option<DateTime<Utc>>,
    /// Sunset time (UTC)
    pub sunset: Option<DateTime<Utc>>,
}

/// One 3-hour forecast reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Forecast time (UTC)
    pub timestamp: DateTime<Utc>,
    /// Temperature in Kelvin
    pub temperature: f64,
    /// Apparent (feels like) temperature in Kelvin
    pub feels_like: f64,
    /// Minimum temperature in Kelvin
    pub temp_min: f64,
    /// Maximum temperature in Kelvin
    pub temp_max: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: Option<f64>,
    /// Condition category and description
    pub condition: Condition,
}

/// Ordered sequence of forecast points with location metadata
///
/// Points arrive in provider order at a 3-hour cadence. Consumers treat
/// ascending timestamps as an invariant to verify, not to assume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSeries {
    /// City name as resolved by the provider
    pub city: String,
    /// ISO country code, when the provider knows it
    pub country: Option<String>,
    /// Forecast points in provider order
    pub points: Vec<ForecastPoint>,
}

impl ForecastSeries {
    /// Display label combining city and country
    #[must_use]
    pub fn location_label(&self) -> String {
        self.country.as_ref().map_or_else(
            || self.city.clone(),
            |country| format!("{}, {country}", self.city),
        )
    }

    /// True when the provider returned no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// =============================================================================
// Raw wire structs
// =============================================================================

/// Raw condition entry from the API's `weather` array
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCondition {
    pub main: String,
    pub description: String,
}

/// Raw `main` metrics block shared by both endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMainMetrics {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: Option<u32>,
    pub humidity: u8,
}

/// Raw wind block; the provider omits it entirely on calm readings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiWind {
    pub speed: Option<f64>,
    pub deg: Option<u16>,
}

/// Raw cloud cover block
#[derive(Debug, Clone, Deserialize)]
pub struct ApiClouds {
    pub all: Option<u8>,
}

/// Raw `sys` block on the current-conditions response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSys {
    pub country: Option<String>,
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

/// Raw current-conditions response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCurrentResponse {
    pub weather: Vec<ApiCondition>,
    pub main: ApiMainMetrics,
    pub visibility: Option<u32>,
    pub wind: Option<ApiWind>,
    pub clouds: Option<ApiClouds>,
    pub dt: i64,
    pub sys: Option<ApiSys>,
    pub name: String,
}

/// Raw forecast list entry
#[derive(Debug, Clone, Deserialize)]
pub struct ApiForecastEntry {
    pub dt: i64,
    pub main: ApiMainMetrics,
    pub weather: Vec<ApiCondition>,
    pub wind: Option<ApiWind>,
}

/// Raw city metadata on the forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCity {
    pub name: String,
    pub country: Option<String>,
}

/// Raw forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiForecastResponse {
    pub list: Vec<ApiForecastEntry>,
    pub city: ApiCity,
}

/// Error body shape the provider returns on non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}
