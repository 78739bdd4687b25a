//! Normalized current-weather report

use serde::{Deserialize, Serialize};

use crate::value_objects::Humidity;

/// Current conditions for one place, in metric units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    /// Place name as reported by the provider
    pub city: String,
    /// Two-letter country code
    pub country: String,
    /// Temperature in °C, rounded to the nearest integer
    pub temperature: i32,
    /// Apparent temperature in °C, rounded to the nearest integer
    pub feels_like: i32,
    /// Condition text, e.g. "light rain"
    pub description: String,
    /// Relative humidity
    pub humidity: Humidity,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Provider icon code, e.g. "10d"
    pub icon: String,
}

/// Raw provider readings before normalization
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub city: String,
    pub country: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub description: String,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub icon: String,
}

impl From<WeatherReading> for WeatherReport {
    fn from(reading: WeatherReading) -> Self {
        Self {
            city: reading.city,
            country: reading.country,
            temperature: round_celsius(reading.temperature_c),
            feels_like: round_celsius(reading.feels_like_c),
            description: reading.description,
            humidity: Humidity::clamped(reading.humidity_pct),
            wind_speed: reading.wind_speed_mps,
            icon: reading.icon,
        }
    }
}

/// Round to the nearest whole degree, halves rounding up (2.5 → 3, -2.5 → -2)
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_celsius(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
