//! Value Objects - Immutable, identity-less domain primitives

mod city_name;
mod forecast_days;
mod trend_label;

pub use city_name::{CityName, InvalidCityName};
pub use forecast_days::{ForecastDays, InvalidForecastDays};
pub use trend_label::TrendLabel;
