//! Exchange-rate integration
//!
//! Client for exchangerate-api style rate tables: `GET {base}/latest/{CODE}`
//! returns every rate anchored at `CODE`.

pub mod client;
mod models;

pub use client::{ExchangeConfig, ExchangeError, ExchangeRateClient, RateTableClient};
pub use models::LatestRates;
