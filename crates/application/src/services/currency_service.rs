//! Currency service - legacy INR table and universal conversion

use std::{fmt, sync::Arc};

use chrono::Utc;
use domain::{
    ConversionResult, DomainError, LegacyConversion,
    value_objects::{Amount, CurrencyCode},
};
use tracing::{info, instrument, warn};

use crate::{error::ApplicationError, ports::ExchangeRatePort};

/// Source currency when the caller does not name one
pub const DEFAULT_FROM_CURRENCY: &str = "INR";
/// Target currency when the caller does not name one
pub const DEFAULT_TO_CURRENCY: &str = "USD";

/// Raw query values of a conversion request
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionRequest<'a> {
    pub amount: Option<&'a str>,
    pub from: Option<&'a str>,
    pub to: Option<&'a str>,
}

/// Conversion use cases over an exchange-rate provider
pub struct CurrencyService {
    rates: Arc<dyn ExchangeRatePort>,
}

impl fmt::Debug for CurrencyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyService").finish_non_exhaustive()
    }
}

impl CurrencyService {
    /// Create a new currency service
    pub fn new(rates: Arc<dyn ExchangeRatePort>) -> Self {
        Self { rates }
    }

    /// Convert an INR amount (default 100) into USD and EUR
    #[instrument(skip(self))]
    pub async fn legacy(&self, amount: Option<&str>) -> Result<LegacyConversion, ApplicationError> {
        let amount = Amount::parse_or(amount, Amount::DEFAULT)?;

        let table = self.rates.rate_table(&CurrencyCode::inr()).await?;
        let usd = table.rate(&CurrencyCode::usd());
        let eur = table.rate(&CurrencyCode::eur());
        let (Some(usd), Some(eur)) = (usd, eur) else {
            warn!("INR rate table lacks USD or EUR");
            return Err(ApplicationError::ExternalService(
                "rate table is missing USD or EUR".to_string(),
            ));
        };

        let result = LegacyConversion::compute(amount, usd, eur);
        info!(inr = result.inr, usd = result.usd, eur = result.eur, "Legacy conversion ready");
        Ok(result)
    }

    /// Convert between any two currencies the provider lists
    ///
    /// Validation runs in a fixed order (amount, code presence, code shape)
    /// and always completes before the provider is contacted.
    #[instrument(skip(self))]
    pub async fn convert(
        &self,
        request: ConversionRequest<'_>,
    ) -> Result<ConversionResult, ApplicationError> {
        let amount = Amount::parse(request.amount.ok_or(DomainError::InvalidAmount)?)?;

        let from = resolve(request.from, DEFAULT_FROM_CURRENCY);
        let to = resolve(request.to, DEFAULT_TO_CURRENCY);
        if from.trim().is_empty() || to.trim().is_empty() {
            return Err(DomainError::MissingCurrency.into());
        }
        let from = CurrencyCode::parse(from)?;
        let to = CurrencyCode::parse(to)?;

        let table = self.rates.rate_table(&from).await?;
        let rate = table
            .rate(&to)
            .ok_or_else(|| ApplicationError::UnsupportedConversion {
                from: from.to_string(),
                to: to.to_string(),
            })?;

        let result = ConversionResult::compute(amount, from, to, rate, Utc::now());
        info!(
            from = %result.from,
            to = %result.to,
            amount = result.from_amount,
            converted = result.to_amount,
            rate = result.rate,
            "Conversion ready"
        );
        Ok(result)
    }
}

fn resolve<'a>(raw: Option<&'a str>, default: &'a str) -> &'a str {
    raw.filter(|v| !v.is_empty()).unwrap_or(default)
}
