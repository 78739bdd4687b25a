//! Weather data models
//!
//! Wire types for the OpenWeatherMap `/weather` response and the flattened
//! reading handed to callers.

use serde::{Deserialize, Serialize};

/// Current conditions at one place, in metric units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Resolved place name
    pub city: String,
    /// ISO 3166 country code
    pub country: String,
    /// Temperature in °C
    pub temperature: f64,
    /// Perceived temperature in °C
    pub feels_like: f64,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Human-readable condition, e.g. "light rain"
    pub description: String,
    /// Provider icon code, e.g. "10d"
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    pub name: String,
    #[serde(default)]
    pub sys: ApiSys,
    pub main: ApiMain,
    #[serde(default)]
    pub weather: Vec<ApiCondition>,
    #[serde(default)]
    pub wind: ApiWind,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiSys {
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCondition {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiWind {
    #[serde(default)]
    pub speed: f64,
}

/// Error body, e.g. `{"cod":"404","message":"city not found"}`
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}

impl ApiResponse {
    /// Flatten into [`CurrentConditions`]
    ///
    /// Returns `None` when the provider sent no condition entry.
    pub(crate) fn into_conditions(self) -> Option<CurrentConditions> {
        let condition = self.weather.into_iter().next()?;
        Some(CurrentConditions {
            city: self.name,
            country: self.sys.country,
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
            description: condition.description,
            icon: condition.icon,
        })
    }
}
