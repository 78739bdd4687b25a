//! HTTP request handlers

pub mod currency;
pub mod fallback;
pub mod health;
pub mod quote;
pub mod weather;
