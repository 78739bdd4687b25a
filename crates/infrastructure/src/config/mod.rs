//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `providers`: weather and exchange-rate providers
//!
//! Sources are layered, later ones winning: built-in defaults, an optional
//! `config.toml` in the working directory, `INFOHUB_*` environment variables,
//! then the plain `PORT` and `WEATHER_API_KEY` variables.
//!
//! Sections and keys are joined with a double underscore, so keys that
//! contain an underscore stay intact: `INFOHUB_SERVER__SHUTDOWN_TIMEOUT_SECS`.

mod providers;
mod server;

use serde::{Deserialize, Serialize};
use tracing::info;

pub use providers::{ExchangeAppConfig, WeatherAppConfig};
pub use server::{LogFormat, ServerConfig};

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Environment variable prefix for structured overrides
pub const ENV_PREFIX: &str = "INFOHUB";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Exchange-rate provider configuration
    #[serde(default)]
    pub exchange: ExchangeAppConfig,
}

impl AppConfig {
    /// Load configuration from the process environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(std::env::vars())
    }

    /// Load configuration from an explicit set of environment variables
    ///
    /// `config.toml` in the working directory is still consulted.
    pub fn load_from(
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, config::ConfigError> {
        let vars: config::Map<String, String> = vars.into_iter().collect();
        let port = vars.get("PORT").filter(|v| !v.is_empty()).cloned();
        let api_key = vars.get("WEATHER_API_KEY").filter(|v| !v.is_empty()).cloned();

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3001)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., INFOHUB_SERVER__LOG_FORMAT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .source(Some(vars)),
            )
            // Conventional unprefixed variables
            .set_override_option("server.port", port)?
            .set_override_option("weather.api_key", api_key)?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Log the effective configuration without exposing secrets
    pub fn log_summary(&self) {
        info!(
            bind = %self.server.bind_addr(),
            log_format = ?self.server.log_format,
            cors_origins = self.server.allowed_origins.len(),
            expose_error_details = self.server.expose_error_details,
            weather_base_url = %self.weather.base_url,
            weather_api_key = %self.weather.api_key_hint(),
            exchange_base_url = %self.exchange.base_url,
            "Configuration loaded"
        );
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.shutdown_timeout_secs, 30);
        assert_eq!(config.server.log_format, LogFormat::Text);
        assert!(config.server.expose_error_details);
        assert!(config.server.allowed_origins.is_empty());
        assert!(!config.weather.has_api_key());
        assert_eq!(config.weather.timeout_secs, 30);
        assert_eq!(
            config.exchange.base_url,
            "https://api.exchangerate-api.com/v4"
        );
    }

    #[test]
    fn load_without_environment_uses_defaults() {
        let config = AppConfig::load_from(Vec::new()).unwrap();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.bind_addr(), "0.0.0.0:3001");
    }

    #[test]
    fn prefixed_variables_override_defaults() {
        let config = AppConfig::load_from(vars(&[
            ("INFOHUB_SERVER__PORT", "8080"),
            ("INFOHUB_SERVER__HOST", "127.0.0.1"),
        ]))
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn prefixed_variables_reach_underscored_keys() {
        let config = AppConfig::load_from(vars(&[
            ("INFOHUB_SERVER__LOG_FORMAT", "json"),
            ("INFOHUB_SERVER__SHUTDOWN_TIMEOUT_SECS", "5"),
            ("INFOHUB_SERVER__EXPOSE_ERROR_DETAILS", "false"),
            (
                "INFOHUB_SERVER__ALLOWED_ORIGINS",
                "http://a.example,http://b.example",
            ),
            ("INFOHUB_WEATHER__BASE_URL", "http://weather.local"),
            ("INFOHUB_WEATHER__TIMEOUT_SECS", "7"),
            ("INFOHUB_EXCHANGE__BASE_URL", "http://rates.local"),
        ]))
        .unwrap();
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.server.shutdown_timeout_secs, 5);
        assert!(!config.server.expose_error_details);
        assert_eq!(
            config.server.allowed_origins,
            vec!["http://a.example".to_string(), "http://b.example".to_string()]
        );
        assert_eq!(config.weather.base_url, "http://weather.local");
        assert_eq!(config.weather.timeout_secs, 7);
        assert_eq!(config.exchange.base_url, "http://rates.local");
    }

    #[test]
    fn dashboard_variables_do_not_disturb_server_config() {
        let config = AppConfig::load_from(vars(&[
            ("INFOHUB_API_URL", "http://localhost:4000"),
            ("INFOHUB_LAT", "51.5"),
        ]))
        .unwrap();
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn plain_port_wins_over_prefixed() {
        let config = AppConfig::load_from(vars(&[
            ("INFOHUB_SERVER__PORT", "8080"),
            ("PORT", "9090"),
        ]))
        .unwrap();
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn weather_api_key_from_plain_variable() {
        let config =
            AppConfig::load_from(vars(&[("WEATHER_API_KEY", "0123456789abcdef")])).unwrap();
        assert_eq!(config.weather.api_key.expose_secret(), "0123456789abcdef");
        assert_eq!(config.weather.api_key_hint(), "01234567...");
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(AppConfig::load_from(vars(&[("PORT", "not-a-port")])).is_err());
    }

    #[test]
    fn api_key_hint_when_unset() {
        assert_eq!(WeatherAppConfig::default().api_key_hint(), "(not set)");
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = AppConfig::load_from(vars(&[("WEATHER_API_KEY", "secret-value")])).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-value"));
    }

    #[test]
    fn client_configs_carry_settings() {
        let config = AppConfig::load_from(vars(&[("WEATHER_API_KEY", "k")])).unwrap();
        let weather = config.weather.to_client_config();
        assert_eq!(weather.api_key, "k");
        assert_eq!(weather.base_url, "https://api.openweathermap.org/data/2.5");
        let exchange = config.exchange.to_client_config();
        assert_eq!(exchange.timeout_secs, 30);
    }

    #[test]
    fn log_format_parses_lowercase() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
    }
}
