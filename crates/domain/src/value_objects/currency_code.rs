//! ISO-4217 style currency code

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Three uppercase ASCII letters, e.g. `INR`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parse a code, trimming whitespace and normalizing to uppercase
    ///
    /// # Errors
    ///
    /// Returns `MissingCurrency` for empty input and `InvalidCurrencyCode`
    /// for anything that is not exactly three ASCII letters.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let code = raw.trim().to_ascii_uppercase();
        if code.is_empty() {
            return Err(DomainError::MissingCurrency);
        }
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DomainError::InvalidCurrencyCode(code));
        }
        Ok(Self(code))
    }

    /// Parse an optional query value; absent or empty input selects `default`
    pub fn parse_or(raw: Option<&str>, default: &str) -> Result<Self, DomainError> {
        match raw.filter(|v| !v.is_empty()) {
            Some(value) => Self::parse(value),
            None => Self::parse(default),
        }
    }

    /// Indian rupee, the anchor of the legacy conversion endpoint
    #[must_use]
    pub fn inr() -> Self {
        Self("INR".to_string())
    }

    /// US dollar
    #[must_use]
    pub fn usd() -> Self {
        Self("USD".to_string())
    }

    /// Euro
    #[must_use]
    pub fn eur() -> Self {
        Self("EUR".to_string())
    }

    /// The code as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
