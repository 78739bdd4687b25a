//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Client input failed validation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The provider reported that the requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The provider rejected our credentials
    #[error("Provider rejected credentials: {0}")]
    Unauthorized(String),

    /// The rate table does not list the target currency
    #[error("Unable to convert from {from} to {to}")]
    UnsupportedConversion { from: String, to: String },

    /// External service error (transport, non-success status, bad body)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the failure was caused by the caller's input
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::UnsupportedConversion { .. })
    }
}
