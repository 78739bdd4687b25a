//! Weather service port
//!
//! Defines the interface for current-conditions lookups.

use async_trait::async_trait;
use domain::{WeatherReport, value_objects::GeoLocation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
///
/// Each call performs exactly one provider request. Adapters map a provider
/// 404 to `ApplicationError::NotFound` and a 401 to `ApplicationError::Unauthorized`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Current conditions for a named city
    async fn current_by_city(&self, city: &str) -> Result<WeatherReport, ApplicationError>;

    /// Current conditions at a coordinate
    async fn current_by_location(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherReport, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }
}
