//! Exchange-rate client
//!
//! HTTP client fetching the full rate table for one base currency.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::LatestRates;

/// Exchange client errors
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The provider rejected the request credentials (HTTP 401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The provider does not know the base currency (HTTP 404)
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

    /// Connection to the rate service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Failed to parse response from rate service
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Exchange-rate service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeConfig {
    /// API base URL (default: <https://api.exchangerate-api.com/v4>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.exchangerate-api.com/v4".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Rate table client trait
#[async_trait]
pub trait RateTableClient: Send + Sync {
    /// All rates anchored at `base` (an upper-case ISO 4217 code)
    async fn latest(&self, base: &str) -> Result<LatestRates, ExchangeError>;
}

/// exchangerate-api HTTP client implementation
#[derive(Debug)]
pub struct ExchangeRateClient {
    client: Client,
    config: ExchangeConfig,
}

impl ExchangeRateClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ExchangeConfig) -> Result<Self, ExchangeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ExchangeError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, ExchangeError> {
        Self::new(ExchangeConfig::default())
    }

    fn latest_url(&self, base: &str) -> String {
        format!(
            "{}/latest/{}",
            self.config.base_url.trim_end_matches('/'),
            base
        )
    }
}

#[async_trait]
impl RateTableClient for ExchangeRateClient {
    #[instrument(skip(self))]
    async fn latest(&self, base: &str) -> Result<LatestRates, ExchangeError> {
        let url = self.latest_url(base);
        debug!(url = %url, "Fetching rate table");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ExchangeError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        debug!(status = %status, "Received rate table response");

        match status {
            s if s.is_success() => {},
            StatusCode::UNAUTHORIZED => {
                return Err(ExchangeError::Unauthorized(format!("HTTP {status}")));
            },
            StatusCode::NOT_FOUND => {
                return Err(ExchangeError::NotFound(format!("no rates for {base}")));
            },
            StatusCode::TOO_MANY_REQUESTS => return Err(ExchangeError::RateLimitExceeded),
            s if s.is_server_error() => {
                return Err(ExchangeError::ServiceUnavailable(format!("HTTP {s}")));
            },
            s => {
                let error_text = response.text().await.unwrap_or_default();
                return Err(ExchangeError::RequestFailed(format!(
                    "HTTP {s}: {error_text}"
                )));
            },
        }

        let latest: LatestRates = response
            .json()
            .await
            .map_err(|e| ExchangeError::ParseError(e.to_string()))?;

        debug!(base = %latest.base, count = latest.rates.len(), "Rate table parsed");
        Ok(latest)
    }
}
