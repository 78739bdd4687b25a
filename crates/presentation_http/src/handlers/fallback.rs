//! Fallback for undefined routes and methods

use crate::error::ApiError;

/// Any path or method the router does not serve
pub async fn endpoint_not_found() -> ApiError {
    ApiError::EndpointNotFound
}
