//! Host geolocation
//!
//! The weather panel asks a [`GeolocationPort`] for the current position and
//! reacts to the discriminated outcome.

use std::time::Duration;

use async_trait::async_trait;
use domain::GeoLocation;
#[cfg(test)]
use mockall::automock;
use tracing::debug;

/// Shown when the host offers no geolocation capability at all
pub const UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported on this host";

const FAILURE_PREFIX: &str = "Unable to get your location. ";

/// Result of one position lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeolocationOutcome {
    Located(GeoLocation),
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unknown,
}

impl GeolocationOutcome {
    /// User-facing text for a failed lookup, `None` when located
    #[must_use]
    pub fn failure_message(&self) -> Option<String> {
        let reason = match self {
            Self::Located(_) => return None,
            Self::PermissionDenied => {
                "Location access was denied. Please enable location permissions."
            },
            Self::PositionUnavailable => "Location information is unavailable.",
            Self::Timeout => "Location request timed out.",
            Self::Unknown => "An unknown error occurred.",
        };
        Some(format!("{FAILURE_PREFIX}{reason}"))
    }
}

/// Source of the host's current position
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeolocationPort: Send + Sync {
    async fn locate(&self) -> GeolocationOutcome;
}

/// Position supplied up front, e.g. from `--lat/--lon`
#[derive(Debug, Clone, Copy)]
pub struct ConfiguredGeolocation {
    position: Option<GeoLocation>,
}

impl ConfiguredGeolocation {
    /// Build from raw coordinates
    ///
    /// Returns `None` when neither coordinate is given, meaning the host has
    /// no geolocation capability. A partial or out-of-range pair is kept as
    /// an unavailable position.
    #[must_use]
    pub fn from_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        let position = match (latitude, longitude) {
            (None, None) => return None,
            (Some(lat), Some(lon)) => GeoLocation::new(lat, lon).ok(),
            _ => None,
        };
        Some(Self { position })
    }
}

#[async_trait]
impl GeolocationPort for ConfiguredGeolocation {
    async fn locate(&self) -> GeolocationOutcome {
        self.position
            .map_or(GeolocationOutcome::PositionUnavailable, GeolocationOutcome::Located)
    }
}

/// Bounds another geolocation source by a deadline
#[derive(Debug)]
pub struct TimeoutGeolocation<P> {
    inner: P,
    timeout: Duration,
}

impl<P> TimeoutGeolocation<P> {
    pub const fn new(inner: P, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl<P: GeolocationPort> GeolocationPort for TimeoutGeolocation<P> {
    async fn locate(&self) -> GeolocationOutcome {
        match tokio::time::timeout(self.timeout, self.inner.locate()).await {
            Ok(outcome) => outcome,
            Err(_) => {
                debug!(timeout_ms = self.timeout.as_millis(), "Geolocation timed out");
                GeolocationOutcome::Timeout
            },
        }
    }
}
