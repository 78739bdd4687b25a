//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod exchange_rate_adapter;
mod static_quote_source;
mod weather_adapter;

pub use exchange_rate_adapter::ExchangeRateAdapter;
pub use static_quote_source::StaticQuoteSource;
pub use weather_adapter::WeatherAdapter;
