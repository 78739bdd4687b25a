//! Weather adapter - Implements WeatherPort using integration_weather

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{WeatherReading, WeatherReport, value_objects::GeoLocation};
use integration_weather::{
    CurrentConditions, OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather lookups against OpenWeatherMap
pub struct WeatherAdapter {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"WeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Wrap an existing client
    pub fn with_client(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::NotFound(e) => ApplicationError::NotFound(e),
            WeatherError::Unauthorized(e) => ApplicationError::Unauthorized(e),
            e @ (WeatherError::RateLimitExceeded
            | WeatherError::ServiceUnavailable(_)
            | WeatherError::RequestFailed(_)
            | WeatherError::ConnectionFailed(_)
            | WeatherError::ParseError(_)) => ApplicationError::ExternalService(e.to_string()),
        }
    }

    fn to_report(conditions: CurrentConditions) -> WeatherReport {
        WeatherReading {
            city: conditions.city,
            country: conditions.country,
            temperature_c: conditions.temperature,
            feels_like_c: conditions.feels_like,
            description: conditions.description,
            humidity_pct: conditions.humidity,
            wind_speed_mps: conditions.wind_speed,
            icon: conditions.icon,
        }
        .into()
    }

    fn finish(
        result: Result<CurrentConditions, WeatherError>,
    ) -> Result<WeatherReport, ApplicationError> {
        match result {
            Ok(conditions) => {
                let report = Self::to_report(conditions);
                debug!(
                    city = %report.city,
                    temperature = report.temperature,
                    "Retrieved current weather"
                );
                Ok(report)
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
                Err(Self::map_error(e))
            },
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn current_by_city(&self, city: &str) -> Result<WeatherReport, ApplicationError> {
        Self::finish(self.client.current_by_city(city).await)
    }

    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn current_by_location(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherReport, ApplicationError> {
        Self::finish(
            self.client
                .current_by_coordinates(location.latitude(), location.longitude())
                .await,
        )
    }
}
