//! Application services
//!
//! The weather tool surface and the pure helpers behind it.

mod formatter;
mod trend_analyzer;
mod weather_tools;

pub use formatter::{DateLocale, format_current, format_forecast};
pub use trend_analyzer::{DailyAverage, TrendReport, analyze_trends};
pub use weather_tools::WeatherTools;
