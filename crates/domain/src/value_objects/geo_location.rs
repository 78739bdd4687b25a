//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A geographic location with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse a location from raw query parameters
    ///
    /// Absent or empty values are reported before any numeric check, so a
    /// request with only one coordinate always yields `MissingCoordinates`.
    pub fn parse(latitude: Option<&str>, longitude: Option<&str>) -> Result<Self, DomainError> {
        let (Some(lat), Some(lon)) = (non_empty(latitude), non_empty(longitude)) else {
            return Err(DomainError::MissingCoordinates);
        };

        let lat: f64 = lat.parse().map_err(|_| DomainError::InvalidCoordinates)?;
        let lon: f64 = lon.parse().map_err(|_| DomainError::InvalidCoordinates)?;

        Self::new(lat, lon)
    }

    /// Create a location without validation (for trusted sources)
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// New Delhi, India
    #[must_use]
    pub const fn new_delhi() -> Self {
        Self::new_unchecked(28.6139, 77.209)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
