//! Unit conversions
//!
//! Pure, deterministic converters between the provider's units and the
//! units shown to people: Kelvin to Celsius and miles to kilometers.
//! Each validated conversion yields a value object pairing the original
//! value, the exact converted value and a display-formatted string.
//!
//! # Examples
//!
//! ```
//! use domain::conversions::{DistanceConversion, TemperatureConversion};
//!
//! let temp = TemperatureConversion::from_kelvin(273.15).expect("valid temperature");
//! assert_eq!(temp.formatted(), "0.0°C");
//!
//! let dist = DistanceConversion::from_miles(10.0).expect("valid distance");
//! assert_eq!(dist.formatted(), "16.09 km");
//! ```

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Offset between the Kelvin and Celsius scales
pub const KELVIN_OFFSET: f64 = 273.15;

/// Kilometers per statute mile
pub const KM_PER_MILE: f64 = 1.60934;

/// Convert a Kelvin reading to Celsius without validation
///
/// Used by the aggregation pipeline and the formatter, which convert
/// provider-supplied readings rather than caller input.
#[must_use]
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// Convert miles to kilometers without validation
#[must_use]
pub fn miles_to_kilometers(miles: f64) -> f64 {
    miles * KM_PER_MILE
}

/// Error returned when a temperature input cannot be converted
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum InvalidTemperature {
    /// NaN or infinite input
    #[error("temperature must be a finite number")]
    NotFinite,
    /// Below 0 K
    #[error("temperature cannot be below absolute zero: {0} K")]
    BelowAbsoluteZero(f64),
}

/// Error returned when a distance input cannot be converted
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum InvalidDistance {
    /// NaN or infinite input
    #[error("distance must be a finite number")]
    NotFinite,
    /// Negative mileage
    #[error("distance cannot be negative: {0} mi")]
    Negative(f64),
}

/// A validated Kelvin-to-Celsius conversion
///
/// Pairs the original Kelvin value with the exact Celsius value
/// (no rounding) and a one-decimal display string.
///
/// # Examples
///
/// ```
/// use domain::conversions::TemperatureConversion;
///
/// let temp = TemperatureConversion::from_kelvin(300.0).expect("valid temperature");
/// assert!((temp.celsius() - (300.0 - 273.15)).abs() < f64::EPSILON);
/// assert_eq!(temp.formatted(), "26.9°C");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureConversion {
    kelvin: f64,
    celsius: f64,
    formatted: String,
}

impl TemperatureConversion {
    /// Convert a Kelvin value to Celsius
    ///
    /// # Errors
    ///
    /// Returns `InvalidTemperature` if the value is not finite or lies
    /// below absolute zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::conversions::TemperatureConversion;
    ///
    /// assert!(TemperatureConversion::from_kelvin(0.0).is_ok());
    /// assert!(TemperatureConversion::from_kelvin(-1.0).is_err());
    /// assert!(TemperatureConversion::from_kelvin(f64::NAN).is_err());
    /// ```
    pub fn from_kelvin(kelvin: f64) -> Result<Self, InvalidTemperature> {
        if !kelvin.is_finite() {
            return Err(InvalidTemperature::NotFinite);
        }
        if kelvin < 0.0 {
            return Err(InvalidTemperature::BelowAbsoluteZero(kelvin));
        }
        let celsius = kelvin_to_celsius(kelvin);
        Ok(Self {
            kelvin,
            celsius,
            formatted: format!("{celsius:.1}°C"),
        })
    }

    /// The original Kelvin value
    #[must_use]
    pub const fn kelvin(&self) -> f64 {
        self.kelvin
    }

    /// The exact converted Celsius value
    #[must_use]
    pub const fn celsius(&self) -> f64 {
        self.celsius
    }

    /// The Celsius value formatted to one decimal
    #[must_use]
    pub fn formatted(&self) -> &str {
        &self.formatted
    }
}

impl fmt::Display for TemperatureConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

/// A validated miles-to-kilometers conversion
///
/// Pairs the original mileage with the exact kilometer value and a
/// two-decimal display string.
///
/// # Examples
///
/// ```
/// use domain::conversions::DistanceConversion;
///
/// let dist = DistanceConversion::from_miles(1.0).expect("valid distance");
/// assert!((dist.kilometers() - 1.60934).abs() < f64::EPSILON);
/// assert_eq!(dist.formatted(), "1.61 km");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceConversion {
    miles: f64,
    kilometers: f64,
    formatted: String,
}

impl DistanceConversion {
    /// Convert a mileage to kilometers
    ///
    /// # Errors
    ///
    /// Returns `InvalidDistance` if the value is not finite or negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::conversions::DistanceConversion;
    ///
    /// assert!(DistanceConversion::from_miles(0.0).is_ok());
    /// assert!(DistanceConversion::from_miles(-0.5).is_err());
    /// ```
    pub fn from_miles(miles: f64) -> Result<Self, InvalidDistance> {
        if !miles.is_finite() {
            return Err(InvalidDistance::NotFinite);
        }
        if miles < 0.0 {
            return Err(InvalidDistance::Negative(miles));
        }
        let kilometers = miles_to_kilometers(miles);
        Ok(Self {
            miles,
            kilometers,
            formatted: format!("{kilometers:.2} km"),
        })
    }

    /// The original distance in miles
    #[must_use]
    pub const fn miles(&self) -> f64 {
        self.miles
    }

    /// The exact converted distance in kilometers
    #[must_use]
    pub const fn kilometers(&self) -> f64 {
        self.kilometers
    }

    /// The kilometer value formatted to two decimals
    #[must_use]
    pub fn formatted(&self) -> &str {
        &self.formatted
    }
}

impl fmt::Display for DistanceConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}
