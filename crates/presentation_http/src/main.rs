//! InfoHub HTTP Server
//!
//! Main entry point for the API gateway.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use infrastructure::{
    AppConfig, DEFAULT_SERVER_FILTER, ExchangeRateAdapter, StaticQuoteSource, WeatherAdapter,
    init_tracing,
};
use presentation_http::{routes, set_expose_internal_errors, state::AppState};
use tokio::{net::TcpListener, signal, sync::Notify};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration first: it picks the log format
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(config.server.log_format, DEFAULT_SERVER_FILTER)?;

    info!("InfoHub v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }
    config.log_summary();
    if !config.weather.has_api_key() {
        warn!("No weather API key configured; weather lookups will fail");
    }

    set_expose_internal_errors(config.server.expose_error_details);

    // Initialize adapters
    let weather = WeatherAdapter::with_config(config.weather.to_client_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize weather client: {e}"))?;
    let rates = ExchangeRateAdapter::with_config(config.exchange.to_client_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize exchange client: {e}"))?;

    let state = AppState::new(
        Arc::new(StaticQuoteSource::builtin()),
        Arc::new(weather),
        Arc::new(rates),
    );

    // Build router
    let app = routes::create_router(state);

    let cors_layer = routes::cors_layer(&config.server.allowed_origins);

    // Add middleware (order matters: last added = outermost)
    let app = app.layer(TraceLayer::new_for_http()).layer(cors_layer);

    // Start server
    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Health: http://{}/api/health", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    let signalled = Arc::new(Notify::new());

    let server = axum::serve(listener, app).with_graceful_shutdown({
        let signalled = Arc::clone(&signalled);
        async move {
            shutdown_signal().await;
            signalled.notify_one();
        }
    });

    tokio::select! {
        result = server.into_future() => result?,
        () = async {
            signalled.notified().await;
            tokio::time::sleep(shutdown_timeout).await;
        } => {
            warn!("Connections still open after {:?}, exiting", shutdown_timeout);
        }
    }

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
