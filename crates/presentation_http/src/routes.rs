//! Route definitions

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
};

use crate::{error::panic_response, handlers, middleware::RequestIdLayer, state::AppState};

/// Create the main router with all routes
///
/// Includes the JSON 404 fallback, the panic guard and request-id
/// correlation. CORS and access logging are added by the binary.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/api/health", get(handlers::health::health_check))
        // Quotes
        .route("/api/quote", get(handlers::quote::get_quote))
        // Weather
        .route("/api/weather", get(handlers::weather::weather_by_city))
        .route("/api/weather/coords", get(handlers::weather::weather_by_coords))
        // Currency
        .route("/api/currency", get(handlers::currency::legacy_currency))
        .route(
            "/api/currency/convert",
            get(handlers::currency::convert_currency),
        )
        // Everything else
        .fallback(handlers::fallback::endpoint_not_found)
        .method_not_allowed_fallback(handlers::fallback::endpoint_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(RequestIdLayer::new())
        // Attach state
        .with_state(state)
}

/// CORS policy for the gateway
///
/// An empty origin list allows any origin. Otherwise only the listed
/// origins may issue `GET` requests; unparseable entries are skipped.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}
