//! Trend label value object
//!
//! Classifies the temperature direction of a forecast window.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of temperature movement over a forecast window
///
/// Serialized in lowercase so report consumers see the plain words
/// `"stable"`, `"warming"` and `"cooling"`.
///
/// # Examples
///
/// ```
/// use domain::value_objects::TrendLabel;
///
/// assert_eq!(format!("{}", TrendLabel::Warming), "warming");
/// assert_eq!(TrendLabel::default(), TrendLabel::Stable);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendLabel {
    /// Too few significant swings to call a direction
    #[default]
    Stable,
    /// Significant swings with a net positive temperature change
    Warming,
    /// Significant swings with a net negative temperature change
    Cooling,
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Stable => "stable",
            Self::Warming => "warming",
            Self::Cooling => "cooling",
        };
        f.write_str(label)
    }
}
