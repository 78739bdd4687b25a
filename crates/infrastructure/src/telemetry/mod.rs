//! Tracing subscriber setup
//!
//! Installs a global `tracing` subscriber filtered by `RUST_LOG` (or the
//! supplied default directive) and formatted as text or JSON.

use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

use crate::config::LogFormat;

/// Default filter for the gateway binary
pub const DEFAULT_SERVER_FILTER: &str =
    "infohub_server=debug,presentation_http=debug,tower_http=debug";

/// Build the filter from `RUST_LOG`, falling back to `default_directive`
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install the global subscriber
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(format: LogFormat, default_directive: &str) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(default_directive));
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .try_init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    }
}
