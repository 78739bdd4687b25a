//! Weather handlers

use application::ApplicationError;
use axum::{
    Json,
    extract::{Query, State},
};
use axum_extra::extract::WithRejection;
use domain::WeatherReport;
use serde::Deserialize;
use tracing::{info, warn};

use crate::{error::ApiError, state::AppState};

const CITY_NOT_FOUND: &str = "City not found. Please check the city name.";
const INVALID_API_KEY: &str = "Invalid API key. Please check your configuration.";
const WEATHER_FAILED: &str = "Could not fetch weather data. Please try again.";
const COORDS_FAILED: &str = "Could not fetch weather data for the given coordinates.";

/// `?city=`
#[derive(Debug, Default, Deserialize)]
pub struct CityQuery {
    pub city: Option<String>,
}

/// `?lat=&lon=`
#[derive(Debug, Default, Deserialize)]
pub struct CoordsQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// Current weather for a city, London by default
pub async fn weather_by_city(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<CityQuery>, ApiError>,
) -> Result<Json<WeatherReport>, ApiError> {
    let report = state
        .weather_service
        .by_city(query.city.as_deref())
        .await
        .map_err(|e| {
            warn!(error = %e, city = ?query.city, "Weather lookup failed");
            match e {
                ApplicationError::NotFound(_) => ApiError::NotFound(CITY_NOT_FOUND.to_string()),
                ApplicationError::Unauthorized(_) => ApiError::internal(INVALID_API_KEY),
                e if e.is_client_error() => ApiError::from(e),
                _ => ApiError::internal(WEATHER_FAILED),
            }
        })?;

    info!(city = %report.city, temperature = report.temperature, "Weather data sent");
    Ok(Json(report))
}

/// Current weather at a coordinate pair
pub async fn weather_by_coords(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<CoordsQuery>, ApiError>,
) -> Result<Json<WeatherReport>, ApiError> {
    let report = state
        .weather_service
        .by_coordinates(query.lat.as_deref(), query.lon.as_deref())
        .await
        .map_err(|e| {
            warn!(error = %e, lat = ?query.lat, lon = ?query.lon, "Coordinate lookup failed");
            if e.is_client_error() {
                ApiError::from(e)
            } else {
                ApiError::internal(COORDS_FAILED)
            }
        })?;

    info!(city = %report.city, "Location weather data sent");
    Ok(Json(report))
}
