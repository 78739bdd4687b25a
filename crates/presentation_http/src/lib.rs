//! InfoHub HTTP presentation layer
//!
//! The API gateway: six read-only `GET` endpoints under `/api`, a JSON 404
//! for everything else, and a panic guard that still answers with JSON.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse, set_expose_internal_errors};
pub use middleware::{REQUEST_ID_HEADER, RequestId, RequestIdLayer};
pub use routes::create_router;
pub use state::AppState;
