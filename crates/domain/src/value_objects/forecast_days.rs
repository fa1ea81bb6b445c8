//! Forecast depth value object
//!
//! Represents a validated forecast window in days (1-5). The upstream
//! forecast endpoint is point-count addressed at a fixed 3-hour cadence,
//! so the day count also knows how to express itself as a point count
//! (8 points per day).
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::ForecastDays;
//!
//! let days = ForecastDays::new(3).expect("valid day count");
//! assert_eq!(days.value(), 3);
//! assert_eq!(days.point_count(), 24);
//!
//! // Out-of-range values are rejected
//! assert!(ForecastDays::new(0).is_err());
//! assert!(ForecastDays::new(6).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a forecast day count is out of range
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid forecast depth: {0} days is out of range (must be 1-5)")]
pub struct InvalidForecastDays(u8);

/// Forecast window in days (1-5)
///
/// # Examples
///
/// ```
/// use domain::value_objects::ForecastDays;
///
/// let days = ForecastDays::new(5).expect("valid day count");
/// assert_eq!(days.point_count(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ForecastDays(u8);

impl ForecastDays {
    /// Minimum forecast window
    pub const MIN: u8 = 1;

    /// Maximum forecast window supported by the provider's free tier
    pub const MAX: u8 = 5;

    /// Forecast points per day at the provider's 3-hour cadence
    pub const POINTS_PER_DAY: u8 = 8;

    /// Create a new validated day count
    ///
    /// # Errors
    ///
    /// Returns `InvalidForecastDays` if the value is outside 1-5.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::value_objects::ForecastDays;
    ///
    /// assert!(ForecastDays::new(1).is_ok());
    /// assert!(ForecastDays::new(5).is_ok());
    /// assert!(ForecastDays::new(6).is_err());
    /// ```
    pub const fn new(value: u8) -> Result<Self, InvalidForecastDays> {
        if value < Self::MIN || value > Self::MAX {
            Err(InvalidForecastDays(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Get the day count as a u8
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Number of 3-hour forecast points covering this window
    ///
    /// The upstream API bounds forecast depth by point count, not day
    /// count, so requests send `days * 8`.
    #[must_use]
    pub const fn point_count(self) -> u8 {
        self.0 * Self::POINTS_PER_DAY
    }
}

/// Five days unless the caller narrows the window
impl Default for ForecastDays {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl fmt::Display for ForecastDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day(s)", self.0)
    }
}

impl TryFrom<u8> for ForecastDays {
    type Error = InvalidForecastDays;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ForecastDays> for u8 {
    fn from(days: ForecastDays) -> Self {
        days.0
    }
}

/// Custom deserialization that validates the day count
impl<'de> Deserialize<'de> for ForecastDays {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
