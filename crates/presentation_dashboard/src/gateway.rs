//! Gateway client
//!
//! Talks to the InfoHub HTTP gateway. Every call is one GET; non-success
//! responses carry the gateway's `{"error": ...}` body.

use std::time::Duration;

use async_trait::async_trait;
use domain::{ConversionResult, GeoLocation, Quote, WeatherReport};
#[cfg(test)]
use mockall::automock;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

/// Default gateway address
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Gateway client errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The gateway answered with a non-success status
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no error message"))]
    Api {
        status: u16,
        /// The body's `error` field, when present
        message: Option<String>,
    },

    /// The gateway could not be reached
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The response body did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

impl GatewayError {
    /// Message the gateway put in the error body, if any
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            Self::Connection(_) | Self::Parse(_) => None,
        }
    }
}

/// Body of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub endpoints: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Operations the dashboard needs from the gateway
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GatewayPort: Send + Sync {
    /// Liveness probe
    async fn health(&self) -> Result<HealthStatus, GatewayError>;

    /// A random quote
    async fn quote(&self) -> Result<Quote, GatewayError>;

    /// Current weather for a city name
    async fn weather_by_city(&self, city: &str) -> Result<WeatherReport, GatewayError>;

    /// Current weather at a coordinate
    async fn weather_by_coords(&self, location: GeoLocation)
    -> Result<WeatherReport, GatewayError>;

    /// Convert `amount` between two currency codes
    async fn convert(
        &self,
        amount: &str,
        from: &str,
        to: &str,
    ) -> Result<ConversionResult, GatewayError>;
}

/// reqwest-backed gateway client
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    /// Create a client for the gateway at `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// The configured gateway address
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, GatewayError> {
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        let status = response.status();
        debug!(status = %status, "Gateway responded");

        if !status.is_success() {
            // Bodies that are not JSON still count as an API error
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))
    }
}

#[async_trait]
impl GatewayPort for GatewayClient {
    #[instrument(skip(self))]
    async fn health(&self) -> Result<HealthStatus, GatewayError> {
        self.get_json(self.client.get(self.endpoint_url("/api/health")))
            .await
    }

    #[instrument(skip(self))]
    async fn quote(&self) -> Result<Quote, GatewayError> {
        self.get_json(self.client.get(self.endpoint_url("/api/quote")))
            .await
    }

    #[instrument(skip(self))]
    async fn weather_by_city(&self, city: &str) -> Result<WeatherReport, GatewayError> {
        let request = self
            .client
            .get(self.endpoint_url("/api/weather"))
            .query(&[("city", city)]);
        self.get_json(request).await
    }

    #[instrument(skip(self))]
    async fn weather_by_coords(
        &self,
        location: GeoLocation,
    ) -> Result<WeatherReport, GatewayError> {
        let request = self
            .client
            .get(self.endpoint_url("/api/weather/coords"))
            .query(&[
                ("lat", location.latitude().to_string()),
                ("lon", location.longitude().to_string()),
            ]);
        self.get_json(request).await
    }

    #[instrument(skip(self))]
    async fn convert(
        &self,
        amount: &str,
        from: &str,
        to: &str,
    ) -> Result<ConversionResult, GatewayError> {
        let request = self
            .client
            .get(self.endpoint_url("/api/currency/convert"))
            .query(&[("amount", amount), ("from", from), ("to", to)]);
        self.get_json(request).await
    }
}
