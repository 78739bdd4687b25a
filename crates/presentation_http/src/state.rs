//! Application state shared across handlers

use std::sync::Arc;

use application::{
    CurrencyService, QuoteService, WeatherService,
    ports::{ExchangeRatePort, QuoteSource, WeatherPort},
};

/// Shared application state
///
/// Every field is immutable after startup; requests share nothing else.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Random quote selection
    pub quote_service: Arc<QuoteService>,
    /// Weather lookups
    pub weather_service: Arc<WeatherService>,
    /// Currency conversion
    pub currency_service: Arc<CurrencyService>,
}

impl AppState {
    /// Wire the services over the given ports
    pub fn new(
        quotes: Arc<dyn QuoteSource>,
        weather: Arc<dyn WeatherPort>,
        rates: Arc<dyn ExchangeRatePort>,
    ) -> Self {
        Self {
            quote_service: Arc::new(QuoteService::new(quotes)),
            weather_service: Arc::new(WeatherService::new(weather)),
            currency_service: Arc::new(CurrencyService::new(rates)),
        }
    }
}
