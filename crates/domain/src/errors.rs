//! Domain-level errors
//!
//! Display strings are the client-facing messages returned with HTTP 400.

use thiserror::Error;

/// Errors raised while validating client input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Amount is missing, non-numeric, non-finite or not positive
    #[error("Invalid amount. Please provide a positive number.")]
    InvalidAmount,

    /// A currency selector resolved to an empty value
    #[error("Both from and to currencies are required.")]
    MissingCurrency,

    /// Currency code is not three ASCII letters
    #[error("Invalid currency code: {0}")]
    InvalidCurrencyCode(String),

    /// Latitude or longitude was not supplied
    #[error("Latitude and longitude are required.")]
    MissingCoordinates,

    /// Latitude or longitude is non-numeric or out of range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,
}
