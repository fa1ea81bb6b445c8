//! Weather trend analysis
//!
//! Turns an ordered forecast series into a trend classification with
//! summary statistics, a dominant condition, and per-day averages.
//! All temperatures in the report are Celsius; the series itself stays
//! in Kelvin as delivered.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDate, Utc};
use domain::TrendLabel;
use domain::conversions::kelvin_to_celsius;
use integration_openweather::{ForecastPoint, ForecastSeries};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Swing between consecutive readings that counts as significant, in degrees
///
/// Deltas are offset-invariant, so the threshold reads the same whether the
/// sequence is taken in Kelvin or Celsius.
const SIGNIFICANT_DELTA: f64 = 1.0;

/// Share of significant swings at or below which a series reads as stable
const STABLE_SHARE: f64 = 0.2;

/// Mean temperature for one calendar date (UTC)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyAverage {
    /// Calendar date the readings fell on
    pub date: NaiveDate,
    /// Arithmetic mean of the day's readings, in Celsius
    pub average_celsius: f64,
}

/// Aggregated trend analysis for one forecast series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendReport {
    /// City the analysis covers
    pub city: String,
    /// ISO country code, when the provider knows it
    pub country: Option<String>,
    /// Overall temperature direction
    pub trend: TrendLabel,
    /// Mean temperature across all readings, in Celsius
    pub average_celsius: f64,
    /// Coldest reading, in Celsius
    pub min_celsius: f64,
    /// Warmest reading, in Celsius
    pub max_celsius: f64,
    /// Spread between the warmest and coldest reading
    pub range_celsius: f64,
    /// Most frequent condition category; "Unknown" for an empty series
    pub dominant_condition: String,
    /// Number of readings carrying the dominant category
    pub dominant_condition_count: usize,
    /// Reading count per condition category
    pub condition_counts: BTreeMap<String, usize>,
    /// Mean temperature per calendar date, in first-seen order
    pub daily_averages: Vec<DailyAverage>,
    /// Number of readings analyzed
    pub point_count: usize,
    /// When the analysis ran
    pub generated_at: DateTime<Utc>,
}

/// Analyze temperature and condition trends across a forecast series
///
/// Statistics cover every point in the series. The requested city is only
/// used when the provider omits the resolved name.
#[must_use]
pub fn analyze_trends(series: &ForecastSeries, requested_city: &str) -> TrendReport {
    let city = if series.city.is_empty() {
        requested_city.to_string()
    } else {
        series.city.clone()
    };

    let temps_kelvin: Vec<f64> = series.points.iter().map(|p| p.temperature).collect();
    let temps_celsius: Vec<f64> = temps_kelvin.iter().copied().map(kelvin_to_celsius).collect();

    let (average_celsius, min_celsius, max_celsius) = summarize(&temps_celsius);
    let (dominant_condition, dominant_condition_count, condition_counts) =
        tally_conditions(&series.points);

    TrendReport {
        trend: classify_trend(&temps_kelvin),
        daily_averages: bucket_daily_averages(&series.points, &city),
        country: series.country.clone(),
        city,
        average_celsius,
        min_celsius,
        max_celsius,
        range_celsius: max_celsius - min_celsius,
        dominant_condition,
        dominant_condition_count,
        condition_counts,
        point_count: series.points.len(),
        generated_at: Utc::now(),
    }
}

/// Mean, minimum and maximum of a temperature list; zeros when empty
fn summarize(temps: &[f64]) -> (f64, f64, f64) {
    if temps.is_empty() {
        return (0.0, 0.0, 0.0);
    }

    let sum: f64 = temps.iter().sum();
    let min = temps.iter().copied().fold(f64::INFINITY, f64::min);
    let max = temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (sum / temps.len() as f64, min, max)
}

/// Classify the overall temperature direction of a reading sequence
///
/// Counts consecutive-reading deltas beyond [`SIGNIFICANT_DELTA`]. When at
/// most a [`STABLE_SHARE`] share of the readings moved that much the series
/// reads as stable; otherwise the sign of the net change decides.
fn classify_trend(temps: &[f64]) -> TrendLabel {
    if temps.is_empty() {
        return TrendLabel::Stable;
    }

    let mut significant = 0usize;
    let mut net_change = 0.0f64;
    for pair in temps.windows(2) {
        let delta = pair[1] - pair[0];
        net_change += delta;
        if delta.abs() > SIGNIFICANT_DELTA {
            significant += 1;
        }
    }

    if significant as f64 <= STABLE_SHARE * temps.len() as f64 {
        TrendLabel::Stable
    } else if net_change > 0.0 {
        TrendLabel::Warming
    } else {
        TrendLabel::Cooling
    }
}

/// Count condition categories and pick the dominant one
///
/// Ties keep the category seen earliest in the series.
fn tally_conditions(points: &[ForecastPoint]) -> (String, usize, BTreeMap<String, usize>) {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut seen_order: Vec<String> = Vec::new();
    for point in points {
        let category = &point.condition.category;
        if !counts.contains_key(category) {
            seen_order.push(category.clone());
        }
        *counts.entry(category.clone()).or_insert(0) += 1;
    }

    let mut dominant: Option<(&String, usize)> = None;
    for category in &seen_order {
        let count = counts.get(category).copied().unwrap_or(0);
        if dominant.is_none_or(|(_, best)| count > best) {
            dominant = Some((category, count));
        }
    }

    match dominant {
        Some((category, count)) => (category.clone(), count, counts),
        None => ("Unknown".to_string(), 0, counts),
    }
}

/// Bucket readings by UTC calendar date and average each bucket
///
/// Buckets come out in first-seen order, which is chronological whenever
/// the provider keeps its ascending-timestamp contract. A violation is
/// logged and the readings are still bucketed by their own dates.
fn bucket_daily_averages(points: &[ForecastPoint], city: &str) -> Vec<DailyAverage> {
    if points
        .windows(2)
        .any(|pair| pair[1].timestamp < pair[0].timestamp)
    {
        warn!(city, "Forecast points arrived out of timestamp order");
    }

    let mut seen_order: Vec<NaiveDate> = Vec::new();
    let mut sums: HashMap<NaiveDate, (f64, usize)> = HashMap::new();
    for point in points {
        let date = point.timestamp.date_naive();
        match sums.get_mut(&date) {
            Some((sum, count)) => {
                *sum += point.temperature;
                *count += 1;
            }
            None => {
                sums.insert(date, (point.temperature, 1));
                seen_order.push(date);
            }
        }
    }

    seen_order
        .into_iter()
        .filter_map(|date| {
            sums.remove(&date).map(|(sum, count)| DailyAverage {
                date,
                average_celsius: kelvin_to_celsius(sum / count as f64),
            })
        })
        .collect()
}
