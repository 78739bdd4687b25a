//! Relative humidity as carried in a weather report
//!
//! OpenWeatherMap reports `main.humidity` as a whole percentage. Reports built
//! from a provider reading are clamped into range; reports read back from the
//! gateway (e.g. by the dashboard) are rejected when out of range.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A gateway payload carried a humidity above 100 %
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("humidity {0}% exceeds 100%")]
pub struct InvalidHumidity(u8);

/// Whole-percent relative humidity, serialized as a bare integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Humidity(u8);

impl Humidity {
    pub const MAX: u8 = 100;

    /// Accept whatever the provider sent, saturating at 100 %
    #[must_use]
    pub const fn clamped(percent: u8) -> Self {
        if percent > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(percent)
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Humidity {
    type Error = InvalidHumidity;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        if percent > Self::MAX {
            Err(InvalidHumidity(percent))
        } else {
            Ok(Self(percent))
        }
    }
}

impl From<Humidity> for u8 {
    fn from(humidity: Humidity) -> Self {
        humidity.0
    }
}
