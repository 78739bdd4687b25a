//! Dashboard panels
//!
//! Each panel owns one data domain. Operations are synchronous state
//! transitions that may return an [`Effect`](crate::effects::Effect) to run.

mod currency;
mod lifecycle;
mod quote;
mod weather;

pub use currency::{AMOUNT_ERROR, CURRENCY_FALLBACK, CurrencyPanel, Side};
pub use lifecycle::{FetchState, FetchView, RequestSequence, RequestTicket};
pub use quote::{QUOTE_FALLBACK, QuotePanel};
pub use weather::{DEFAULT_CITY, WEATHER_FALLBACK, WeatherPanel, icon_url};

use crate::gateway::GatewayError;

/// Backend `error` text, or the panel's generic message
fn user_message<T>(result: Result<T, GatewayError>, fallback: &str) -> Result<T, String> {
    result.map_err(|err| {
        err.backend_message()
            .map_or_else(|| fallback.to_string(), str::to_string)
    })
}
