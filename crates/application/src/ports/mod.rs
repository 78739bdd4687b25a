//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod exchange_rate_port;
mod quote_source;
mod weather_port;

#[cfg(test)]
pub use exchange_rate_port::MockExchangeRatePort;
pub use exchange_rate_port::{ExchangeRatePort, RateTable};
#[cfg(test)]
pub use quote_source::MockQuoteSource;
pub use quote_source::QuoteSource;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
