//! API error handling
//!
//! Every failure path answers with an [`ErrorResponse`] JSON body. The raw
//! text of internal failures goes into `details` only while exposure is
//! enabled (see [`set_expose_internal_errors`]).

use std::{
    any::Any,
    sync::atomic::{AtomicBool, Ordering},
};

use application::ApplicationError;
use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Global flag to control error detail exposure
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

/// Configure whether internal error details should be exposed in responses.
///
/// When `false`, 500 bodies carry only the `error` message.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

/// Check if internal error details should be exposed
fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// Endpoints advertised by the 404 fallback
pub const AVAILABLE_ENDPOINTS: [&str; 6] = [
    "GET /api/health",
    "GET /api/quote",
    "GET /api/weather?city=CityName",
    "GET /api/weather/coords?lat=LAT&lon=LON",
    "GET /api/currency?amount=100",
    "GET /api/currency/convert?amount=100&from=INR&to=USD",
];

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400 with the message as `error`
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 404 with the message as `error`
    #[error("Not found: {0}")]
    NotFound(String),

    /// 404 for an undefined route, listing the real ones
    #[error("Endpoint not found")]
    EndpointNotFound,

    /// 500 with a fixed message and optional raw details
    #[error("{message}")]
    Internal {
        message: String,
        details: Option<String>,
    },
}

impl ApiError {
    /// 500 with only a message
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            details: None,
        }
    }

    /// 500 with a message and the underlying error text
    pub fn internal_with_details(message: impl Into<String>, details: impl ToString) -> Self {
        Self::Internal {
            message: message.into(),
            details: Some(details.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Underlying error text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Routes the gateway serves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_endpoints: Option<Vec<String>>,
}

impl ErrorResponse {
    /// Body with only an `error` field
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            available_endpoints: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::message(msg)),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::message(msg)),
            Self::EndpointNotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "Endpoint not found".to_string(),
                    details: None,
                    available_endpoints: Some(
                        AVAILABLE_ENDPOINTS.iter().map(ToString::to_string).collect(),
                    ),
                },
            ),
            Self::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: message,
                    details: details.filter(|_| should_expose_details()),
                    available_endpoints: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Client input errors keep their message; anything else is a generic 500
impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        if err.is_client_error() {
            Self::BadRequest(err.to_string())
        } else {
            Self::internal_with_details("Internal server error", err)
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Response for a handler panic caught by `CatchPanicLayer`
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(ToString::to_string))
        .unwrap_or_else(|| "Unknown panic".to_string());

    error!(details = %details, "Handler panicked");
    ApiError::internal_with_details("Internal server error", details).into_response()
}
