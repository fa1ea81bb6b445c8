//! Weather tool layer
//!
//! The callable surface the agent shell registers with the language model.
//! Each operation validates its input, talks to the weather provider where
//! needed, and returns typed results the shell can serialize for the model.

use std::fmt;
use std::sync::Arc;

use domain::{DistanceConversion, TemperatureConversion};
use integration_openweather::{ForecastSeries, WeatherApi, WeatherSnapshot};
use tracing::{info, instrument};

use super::trend_analyzer::{self, TrendReport};
use crate::error::ToolError;

/// Tool layer over a weather provider
///
/// Holds the provider behind a trait object so tests can substitute a mock
/// and the shell can share one instance across tool invocations.
#[derive(Clone)]
pub struct WeatherTools {
    api: Arc<dyn WeatherApi>,
}

impl fmt::Debug for WeatherTools {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherTools").finish_non_exhaustive()
    }
}

impl WeatherTools {
    #[must_use]
    pub fn new(api: Arc<dyn WeatherApi>) -> Self {
        Self { api }
    }

    /// Fetch the current weather for a city
    #[instrument(skip(self))]
    pub async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, ToolError> {
        let snapshot = self.api.current_weather(city).await?;
        info!(city = %snapshot.city, "Fetched current weather");
        Ok(snapshot)
    }

    /// Fetch a forecast covering the next `days` days (1 to 5)
    #[instrument(skip(self))]
    pub async fn forecast(&self, city: &str, days: u8) -> Result<ForecastSeries, ToolError> {
        let series = self.api.forecast(city, days).await?;
        info!(
            city = %series.city,
            points = series.points.len(),
            "Fetched weather forecast"
        );
        Ok(series)
    }

    /// Convert a temperature from Kelvin to Celsius
    pub fn kelvin_to_celsius(&self, kelvin: f64) -> Result<TemperatureConversion, ToolError> {
        Ok(TemperatureConversion::from_kelvin(kelvin)?)
    }

    /// Convert a distance from miles to kilometers
    pub fn miles_to_km(&self, miles: f64) -> Result<DistanceConversion, ToolError> {
        Ok(DistanceConversion::from_miles(miles)?)
    }

    /// Fetch a forecast and analyze its temperature and condition trends
    #[instrument(skip(self))]
    pub async fn analyze_trends(&self, city: &str, days: u8) -> Result<TrendReport, ToolError> {
        let series = self.api.forecast(city, days).await?;
        let report = trend_analyzer::analyze_trends(&series, city);
        info!(
            city = %report.city,
            trend = %report.trend,
            points = report.point_count,
            "Analyzed weather trends"
        );
        Ok(report)
    }
}
