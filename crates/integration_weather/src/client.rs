//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap current weather endpoint.

use std::{fmt, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{ApiErrorBody, ApiResponse, CurrentConditions};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider rejected the API key (HTTP 401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The provider does not know the requested place (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Service is temporarily unavailable (HTTP 5xx)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Any other non-success response
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key, sent as `appid`
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching current conditions
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Current conditions for a named city
    async fn current_by_city(&self, city: &str) -> Result<CurrentConditions, WeatherError>;

    /// Current conditions at a coordinate
    async fn current_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl fmt::Debug for OpenWeatherClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn weather_url(&self) -> String {
        format!("{}/weather", self.config.base_url.trim_end_matches('/'))
    }

    async fn fetch(&self, query: &[(&str, String)]) -> Result<CurrentConditions, WeatherError> {
        let url = self.weather_url();
        debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[
                ("appid", self.config.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        debug!(status = %status, "Received weather response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or_else(|_| format!("HTTP {status}"));
            return Err(match status {
                StatusCode::UNAUTHORIZED => WeatherError::Unauthorized(message),
                StatusCode::NOT_FOUND => WeatherError::NotFound(message),
                StatusCode::TOO_MANY_REQUESTS => WeatherError::RateLimitExceeded,
                s if s.is_server_error() => WeatherError::ServiceUnavailable(format!("HTTP {s}")),
                s => WeatherError::RequestFailed(format!("HTTP {s}: {message}")),
            });
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        api_response.into_conditions().ok_or_else(|| {
            warn!("Weather response carried no condition entry");
            WeatherError::ParseError("No weather condition in response".to_string())
        })
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn current_by_city(&self, city: &str) -> Result<CurrentConditions, WeatherError> {
        self.fetch(&[("q", city.to_string())]).await
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn current_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, WeatherError> {
        self.fetch(&[("lat", latitude.to_string()), ("lon", longitude.to_string())])
            .await
    }
}
