//! Currency conversion results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Amount, CurrencyCode};

/// Round to a fixed number of decimal places
#[must_use]
pub fn round_dp(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Outcome of converting an amount between two currencies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub from_amount: f64,
    /// Converted amount, 2 decimal places
    pub to_amount: f64,
    /// Spot rate `from → to`, 6 decimal places
    pub rate: f64,
    #[serde(serialize_with = "crate::time::serialize_iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl ConversionResult {
    /// Apply a spot rate to an amount
    ///
    /// The converted amount is computed from the unrounded rate and rounded
    /// afterwards.
    #[must_use]
    pub fn compute(
        amount: Amount,
        from: CurrencyCode,
        to: CurrencyCode,
        rate: f64,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            from,
            to,
            from_amount: amount.value(),
            to_amount: round_dp(amount.value() * rate, 2),
            rate: round_dp(rate, 6),
            timestamp: at,
        }
    }
}

/// Shape of the legacy INR → USD/EUR endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyConversion {
    pub inr: f64,
    pub usd: f64,
    pub eur: f64,
    pub rates: LegacyRates,
}

/// Spot rates rendered as 4-decimal strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyRates {
    pub usd: String,
    pub eur: String,
}

impl LegacyConversion {
    /// Convert an INR amount with the given USD and EUR rates
    #[must_use]
    pub fn compute(amount: Amount, usd_rate: f64, eur_rate: f64) -> Self {
        let inr = amount.value();
        Self {
            inr,
            usd: round_dp(inr * usd_rate, 2),
            eur: round_dp(inr * eur_rate, 2),
            rates: LegacyRates {
                usd: format!("{usd_rate:.4}"),
                eur: format!("{eur_rate:.4}"),
            },
        }
    }
}
