//! Health check handler

use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Paths served by the gateway
pub const ENDPOINTS: [&str; 6] = [
    "/api/health",
    "/api/quote",
    "/api/weather",
    "/api/weather/coords",
    "/api/currency",
    "/api/currency/convert",
];

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub endpoints: Vec<String>,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Server is running".to_string(),
        timestamp: domain::time::iso_millis(Utc::now()),
        endpoints: ENDPOINTS.iter().map(ToString::to_string).collect(),
    })
}
