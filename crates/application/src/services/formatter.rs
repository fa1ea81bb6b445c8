//! Presentation formatting for weather replies
//!
//! Renders snapshots and forecast series into the Markdown-flavoured text
//! the assistant sends back to the user. Formatting never fails; missing
//! readings render as placeholders.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use domain::conversions::kelvin_to_celsius;
use integration_openweather::{ForecastPoint, ForecastSeries, WeatherSnapshot};

/// Weekday-and-date pattern for forecast day headers, e.g. "Tuesday, 30 August"
const DATE_FORMAT: &str = "%A, %d %B";

/// Locale used for weekday and month names in forecast replies
///
/// Built from a BCP 47 language tag such as `es-ES` or `de-DE`. Tags chrono
/// does not ship data for fall back to English names.
#[derive(Debug, Clone, Copy)]
pub struct DateLocale {
    locale: chrono::Locale,
}

impl DateLocale {
    #[must_use]
    pub fn from_language_tag(tag: &str) -> Self {
        let normalized = tag.replace('-', "_");
        let locale =
            chrono::Locale::try_from(normalized.as_str()).unwrap_or(chrono::Locale::POSIX);
        Self { locale }
    }
}

impl Default for DateLocale {
    fn default() -> Self {
        Self {
            locale: chrono::Locale::POSIX,
        }
    }
}

/// Render a current-weather snapshot as a five-line reply
#[must_use]
pub fn format_current(snapshot: &WeatherSnapshot) -> String {
    let temperature = kelvin_to_celsius(snapshot.temperature);
    let feels_like = kelvin_to_celsius(snapshot.feels_like);
    let wind = snapshot
        .wind_speed
        .map_or_else(|| "N/A".to_string(), |speed| speed.to_string());

    [
        format!("🌡 *Temperature:* {temperature:.1}°C"),
        format!("🌡 *Feels like:* {feels_like:.1}°C"),
        format!("💧 *Humidity:* {}%", snapshot.humidity),
        format!("💨 *Wind:* {wind} m/s"),
        format!(
            "🌤 *Condition:* {} ({})",
            snapshot.condition.category,
            snapshot.condition.display_description()
        ),
    ]
    .join("\n")
}

/// Render a forecast series as one block per calendar day
///
/// Points are grouped by UTC date and each day is summarized by the reading
/// closest to noon. At most `days` day blocks are rendered; the header counts
/// the blocks actually shown.
#[must_use]
pub fn format_forecast(series: &ForecastSeries, days: u8, locale: DateLocale) -> String {
    let location = series.location_label();
    if series.points.is_empty() {
        return format!("No forecast data found for {location}");
    }

    let mut buckets: BTreeMap<NaiveDate, Vec<&ForecastPoint>> = BTreeMap::new();
    for point in &series.points {
        buckets
            .entry(point.timestamp.date_naive())
            .or_default()
            .push(point);
    }

    let blocks: Vec<String> = buckets
        .iter()
        .take(usize::from(days))
        .filter_map(|(date, points)| render_day(*date, points, locale))
        .collect();

    let mut parts = Vec::with_capacity(blocks.len() + 1);
    parts.push(format!(
        "🌤 *Forecast for {location}* (next {} days):\n",
        blocks.len()
    ));
    parts.extend(blocks);
    parts.join("\n")
}

fn render_day(date: NaiveDate, points: &[&ForecastPoint], locale: DateLocale) -> Option<String> {
    let representative = closest_to_noon(date, points)?;
    let date_text = capitalize_first(
        &representative
            .timestamp
            .format_localized(DATE_FORMAT, locale.locale)
            .to_string(),
    );
    let wind = representative
        .wind_speed
        .map_or_else(|| "N/A".to_string(), |speed| speed.to_string());

    Some(format!(
        "📅 *{date_text}* {icon}\n   {description}\n   🌡 {temperature:.1}°C (Max: {max:.1}°C • Min: {min:.1}°C)\n   💧 Humidity: {humidity}% • 💨 Wind: {wind} m/s\n",
        icon = condition_icon(&representative.condition.category),
        description = representative.condition.display_description(),
        temperature = kelvin_to_celsius(representative.temperature),
        max = kelvin_to_celsius(representative.temp_max),
        min = kelvin_to_celsius(representative.temp_min),
        humidity = representative.humidity,
    ))
}

/// Pick the reading closest to noon of the day; first wins on a tie
fn closest_to_noon<'a>(date: NaiveDate, points: &[&'a ForecastPoint]) -> Option<&'a ForecastPoint> {
    let noon = date.and_time(NaiveTime::MIN).and_utc().timestamp() + 12 * 3_600;
    points
        .iter()
        .min_by_key(|point| (point.timestamp.timestamp() - noon).abs())
        .copied()
}

fn condition_icon(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "clear" => "☀️",
        "clouds" => "☁️",
        "rain" => "🌧️",
        "snow" => "❄️",
        "thunderstorm" => "⛈️",
        "drizzle" => "🌦️",
        "mist" => "🌫️",
        _ => "🌤️",
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
