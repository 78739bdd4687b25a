//! Exchange-rate port

use std::collections::HashMap;

use async_trait::async_trait;
use domain::value_objects::CurrencyCode;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Spot rates keyed by target code, anchored at one base currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub base: CurrencyCode,
    pub rates: HashMap<String, f64>,
}

impl RateTable {
    /// Rate from the base to `target`, if the provider listed it
    ///
    /// Zero or non-finite rates are treated as absent.
    pub fn rate(&self, target: &CurrencyCode) -> Option<f64> {
        self.rates
            .get(target.as_str())
            .copied()
            .filter(|r| r.is_finite() && *r != 0.0)
    }
}

/// Port for fetching rate tables
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ExchangeRatePort: Send + Sync {
    /// The full rate table anchored at `base`
    async fn rate_table(&self, base: &CurrencyCode) -> Result<RateTable, ApplicationError>;
}
