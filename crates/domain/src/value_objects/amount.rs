//! Positive monetary amount

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A finite, strictly positive amount of money in some currency
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Default amount used when a caller omits it on the legacy endpoint
    pub const DEFAULT: Self = Self(100.0);

    /// Validate a numeric amount
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` for NaN, infinities, zero and negatives.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidAmount)
        }
    }

    /// Parse an amount from user input
    ///
    /// Surrounding whitespace is ignored. Textual spellings such as `inf` or
    /// `NaN` are rejected along with everything else that is not a positive
    /// finite number.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let value: f64 = raw.trim().parse().map_err(|_| DomainError::InvalidAmount)?;
        Self::new(value)
    }

    /// Parse an optional query value, falling back to `default` when absent or empty
    pub fn parse_or(raw: Option<&str>, default: Self) -> Result<Self, DomainError> {
        match raw.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => Self::parse(value),
            None => Ok(default),
        }
    }

    /// Get the raw value
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
