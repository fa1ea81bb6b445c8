//! Domain layer for Stratus
//!
//! Contains the validated value objects and pure unit conversions the
//! weather tools are built from. This layer performs no I/O and defines
//! the ubiquitous language.

pub mod conversions;
pub mod value_objects;

pub use conversions::{
    DistanceConversion, InvalidDistance, InvalidTemperature, TemperatureConversion,
};
pub use value_objects::{
    CityName, ForecastDays, InvalidCityName, InvalidForecastDays, TrendLabel,
};
