//! Request/response value shapes

mod conversion;
mod quote;
mod weather_report;

pub use conversion::{ConversionResult, LegacyConversion, LegacyRates, round_dp};
pub use quote::Quote;
pub use weather_report::{WeatherReading, WeatherReport, round_celsius};
