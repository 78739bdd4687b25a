//! Exchange-rate adapter - Implements ExchangeRatePort using integration_exchange

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{ExchangeRatePort, RateTable};
use async_trait::async_trait;
use domain::value_objects::CurrencyCode;
use integration_exchange::{ExchangeConfig, ExchangeError, ExchangeRateClient, RateTableClient};
use tracing::{debug, instrument, warn};

/// Adapter for rate tables
pub struct ExchangeRateAdapter {
    client: Arc<dyn RateTableClient>,
}

impl std::fmt::Debug for ExchangeRateAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeRateAdapter")
            .field("client", &"RateTableClient")
            .finish()
    }
}

impl ExchangeRateAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: ExchangeConfig) -> Result<Self, ApplicationError> {
        let client = ExchangeRateClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Wrap an existing client
    pub fn with_client(client: Arc<dyn RateTableClient>) -> Self {
        Self { client }
    }

    fn map_error(err: ExchangeError) -> ApplicationError {
        match err {
            ExchangeError::NotFound(e) => ApplicationError::NotFound(e),
            ExchangeError::Unauthorized(e) => ApplicationError::Unauthorized(e),
            e => ApplicationError::ExternalService(e.to_string()),
        }
    }
}

#[async_trait]
impl ExchangeRatePort for ExchangeRateAdapter {
    #[instrument(skip(self), fields(base = %base))]
    async fn rate_table(&self, base: &CurrencyCode) -> Result<RateTable, ApplicationError> {
        let latest = self.client.latest(base.as_str()).await.map_err(|e| {
            debug!(error = %e, "Failed to get rate table");
            Self::map_error(e)
        })?;

        if !latest.base.eq_ignore_ascii_case(base.as_str()) {
            warn!(requested = %base, returned = %latest.base, "Provider answered for another base");
        }

        debug!(rates = latest.rates.len(), "Retrieved rate table");
        Ok(RateTable {
            base: base.clone(),
            rates: latest.rates,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use integration_exchange::LatestRates;

    use super::*;

    struct FixedClient(fn(&str) -> Result<LatestRates, ExchangeError>);

    #[async_trait]
    impl RateTableClient for FixedClient {
        async fn latest(&self, base: &str) -> Result<LatestRates, ExchangeError> {
            (self.0)(base)
        }
    }

    #[tokio::test]
    async fn builds_rate_table() {
        let adapter = ExchangeRateAdapter::with_client(Arc::new(FixedClient(|base| {
            Ok(LatestRates {
                base: base.to_string(),
                date: None,
                rates: HashMap::from([("USD".to_string(), 0.012)]),
            })
        })));

        let table = adapter.rate_table(&CurrencyCode::inr()).await.unwrap();
        assert_eq!(table.base, CurrencyCode::inr());
        assert_eq!(table.rate(&CurrencyCode::usd()), Some(0.012));
    }

    #[tokio::test]
    async fn maps_provider_errors() {
        let adapter = ExchangeRateAdapter::with_client(Arc::new(FixedClient(|_| {
            Err(ExchangeError::ServiceUnavailable("HTTP 503".into()))
        })));

        let err = adapter.rate_table(&CurrencyCode::inr()).await.unwrap_err();
        match err {
            ApplicationError::ExternalService(message) => assert!(message.contains("503")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn map_error_not_found() {
        let err = ExchangeRateAdapter::map_error(ExchangeError::NotFound("XYZ".into()));
        assert!(matches!(err, ApplicationError::NotFound(_)));
    }

    #[test]
    fn with_config_creates_adapter() {
        assert!(ExchangeRateAdapter::with_config(ExchangeConfig::default()).is_ok());
    }
}
