//! Application services - Use case implementations

mod currency_service;
mod quote_service;
mod weather_service;

pub use currency_service::{
    ConversionRequest, CurrencyService, DEFAULT_FROM_CURRENCY, DEFAULT_TO_CURRENCY,
};
pub use quote_service::QuoteService;
pub use weather_service::{DEFAULT_CITY, WeatherService};
