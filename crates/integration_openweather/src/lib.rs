//! OpenWeatherMap integration for Stratus
//!
//! Provides current conditions and 5-day / 3-hour forecasts via the
//! [OpenWeatherMap](https://openweathermap.org/api) data API, keyed by
//! city name.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with other
//! integration crates. [`WeatherApi`] defines the interface for current
//! conditions and forecasts, implemented by [`OpenWeatherClient`]. Raw
//! wire structs stay private; consumers only see the typed
//! [`WeatherSnapshot`] and [`ForecastSeries`] models.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_openweather::{OpenWeatherClient, WeatherApi};
//!
//! let client = OpenWeatherClient::from_env()?;
//!
//! let snapshot = client.current_weather("Paris").await?;
//! let series = client.forecast("Paris", 3).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{OpenWeatherClient, WeatherApi};
pub use config::OpenWeatherConfig;
pub use error::WeatherApiError;
pub use models::{Condition, ForecastPoint, ForecastSeries, WeatherSnapshot};
