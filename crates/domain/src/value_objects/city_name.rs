//! City name value object
//!
//! Represents a validated location query: a city name that is non-empty
//! after trimming. No further normalization is applied; the upstream
//! provider resolves spelling and disambiguation.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::CityName;
//!
//! let city = CityName::new("  Paris  ").expect("valid city");
//! assert_eq!(city.as_str(), "Paris");
//!
//! // Empty and blank inputs are rejected
//! assert!(CityName::new("").is_err());
//! assert!(CityName::new("   ").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a city name is empty or blank
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("city name must not be empty")]
pub struct InvalidCityName;

/// A validated, trimmed city name
///
/// The stored value is always the trimmed input and never empty.
///
/// # Examples
///
/// ```
/// use domain::value_objects::CityName;
///
/// let city = CityName::new("London").expect("valid city");
/// assert_eq!(format!("{city}"), "London");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CityName(String);

impl CityName {
    /// Create a new validated city name
    ///
    /// The input is trimmed before validation; the trimmed form is stored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCityName` if the input is empty after trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::value_objects::CityName;
    ///
    /// assert!(CityName::new("Berlin").is_ok());
    /// assert!(CityName::new(" \t ").is_err());
    /// ```
    pub fn new(input: &str) -> Result<Self, InvalidCityName> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            Err(InvalidCityName)
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }

    /// Get the city name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the value object and return the inner string
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for CityName {
    type Error = InvalidCityName;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for CityName {
    type Error = InvalidCityName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Custom deserialization that re-validates the city name
impl<'de> Deserialize<'de> for CityName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(&value).map_err(serde::de::Error::custom)
    }
}
