//! Provider configurations: weather and exchange rates.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// ==============================
// Weather Configuration
// ==============================

/// OpenWeatherMap configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// API key (sensitive - uses `SecretString`)
    ///
    /// Left empty the provider answers 401 and the gateway reports a
    /// configuration error.
    #[serde(default = "empty_secret", skip_serializing)]
    pub api_key: SecretString,

    /// API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            api_key: empty_secret(),
            base_url: default_weather_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl WeatherAppConfig {
    /// Whether an API key has been configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }

    /// First 8 characters of the key, for log lines
    #[must_use]
    pub fn api_key_hint(&self) -> String {
        let key = self.api_key.expose_secret();
        if key.is_empty() {
            return "(not set)".to_string();
        }
        let prefix: String = key.chars().take(8).collect();
        format!("{prefix}...")
    }

    /// Client configuration for [`integration_weather::OpenWeatherClient`]
    #[must_use]
    pub fn to_client_config(&self) -> integration_weather::WeatherConfig {
        integration_weather::WeatherConfig {
            api_key: self.api_key.expose_secret().to_string(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

// ==============================
// Exchange Configuration
// ==============================

/// Exchange-rate provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeAppConfig {
    /// API base URL; tables are fetched from `{base_url}/latest/{CODE}`
    #[serde(default = "default_exchange_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_exchange_base_url() -> String {
    "https://api.exchangerate-api.com/v4".to_string()
}

impl Default for ExchangeAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_exchange_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ExchangeAppConfig {
    /// Client configuration for [`integration_exchange::ExchangeRateClient`]
    #[must_use]
    pub fn to_client_config(&self) -> integration_exchange::ExchangeConfig {
        integration_exchange::ExchangeConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
