//! Weather service - validates lookups before they reach the provider

use std::{fmt, sync::Arc};

use domain::{WeatherReport, value_objects::GeoLocation};
use tracing::{info, instrument};

use crate::{error::ApplicationError, ports::WeatherPort};

/// City used when the caller does not name one
pub const DEFAULT_CITY: &str = "London";

/// Current-conditions lookups by city or coordinates
pub struct WeatherService {
    weather: Arc<dyn WeatherPort>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// Weather for a city; absent or blank names select [`DEFAULT_CITY`]
    #[instrument(skip(self))]
    pub async fn by_city(&self, city: Option<&str>) -> Result<WeatherReport, ApplicationError> {
        let city = city
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CITY);

        let report = self.weather.current_by_city(city).await?;
        info!(city = %report.city, country = %report.country, "Weather report ready");
        Ok(report)
    }

    /// Weather at raw `lat`/`lon` query values
    ///
    /// Both values are validated before the provider is called.
    #[instrument(skip(self))]
    pub async fn by_coordinates(
        &self,
        latitude: Option<&str>,
        longitude: Option<&str>,
    ) -> Result<WeatherReport, ApplicationError> {
        let location = GeoLocation::parse(latitude, longitude)?;

        let report = self.weather.current_by_location(&location).await?;
        info!(%location, city = %report.city, "Weather report ready");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use domain::{DomainError, WeatherReading};
    use mockall::predicate::eq;

    use super::*;
    use crate::ports::MockWeatherPort;

    fn report(city: &str) -> WeatherReport {
        WeatherReading {
            city: city.to_string(),
            country: "GB".to_string(),
            temperature_c: 11.4,
            feels_like_c: 9.6,
            description: "overcast clouds".to_string(),
            humidity_pct: 71,
            wind_speed_mps: 3.6,
            icon: "04d".to_string(),
        }
        .into()
    }

    #[tokio::test]
    async fn defaults_to_london() {
        let mut port = MockWeatherPort::new();
        port.expect_current_by_city()
            .with(eq("London"))
            .times(2)
            .returning(|c| Ok(report(c)));
        let service = WeatherService::new(Arc::new(port));

        assert_eq!(service.by_city(None).await.unwrap().city, "London");
        assert_eq!(service.by_city(Some("  ")).await.unwrap().city, "London");
    }

    #[tokio::test]
    async fn passes_city_through() {
        let mut port = MockWeatherPort::new();
        port.expect_current_by_city()
            .with(eq("Paris"))
            .times(1)
            .returning(|c| Ok(report(c)));
        let service = WeatherService::new(Arc::new(port));

        assert_eq!(service.by_city(Some("Paris")).await.unwrap().city, "Paris");
    }

    #[tokio::test]
    async fn provider_not_found_propagates() {
        let mut port = MockWeatherPort::new();
        port.expect_current_by_city()
            .returning(|c| Err(ApplicationError::NotFound(c.to_string())));
        let service = WeatherService::new(Arc::new(port));

        assert!(matches!(
            service.by_city(Some("Atlantis")).await,
            Err(ApplicationError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn missing_coordinate_never_calls_provider() {
        let mut port = MockWeatherPort::new();
        port.expect_current_by_location().never();
        let service = WeatherService::new(Arc::new(port));

        let err = service.by_coordinates(Some("28.6"), None).await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::MissingCoordinates)
        ));
    }

    #[tokio::test]
    async fn invalid_coordinate_never_calls_provider() {
        let mut port = MockWeatherPort::new();
        port.expect_current_by_location().never();
        let service = WeatherService::new(Arc::new(port));

        let err = service
            .by_coordinates(Some("95"), Some("10"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::InvalidCoordinates)
        ));
    }

    #[tokio::test]
    async fn coordinates_reach_provider() {
        let mut port = MockWeatherPort::new();
        port.expect_current_by_location()
            .withf(|loc| (loc.latitude() - 28.6139).abs() < 1e-9)
            .times(1)
            .returning(|_| Ok(report("New Delhi")));
        let service = WeatherService::new(Arc::new(port));

        let result = service
            .by_coordinates(Some("28.6139"), Some("77.2090"))
            .await
            .unwrap();
        assert_eq!(result.city, "New Delhi");
    }
}
