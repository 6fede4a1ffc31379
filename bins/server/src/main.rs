//! Currency Service
//!
//! Main entry point: loads configuration and the rate table, then serves the
//! HTTP API until Ctrl-C or SIGTERM.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use currency_api::{AppState, create_router};
use currency_core::currency::{CurrencyService, RateTable};
use currency_shared::{AppConfig, LogFormat, config::LoggingConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);
    info!(service = %config.service_name, "Configuration loaded");

    // Rate table must be in place before the first request is served
    let rates = match &config.rates.path {
        Some(path) => RateTable::from_path(path)
            .with_context(|| format!("Failed to load rates from {}", path.display()))?,
        None => RateTable::bundled().context("Bundled rate table is invalid")?,
    };
    info!(
        currencies = rates.len(),
        source = %config
            .rates
            .path
            .as_ref()
            .map_or_else(|| "bundled".to_string(), |p| p.display().to_string()),
        "Exchange rates loaded"
    );

    let state = AppState {
        currency: CurrencyService::new(rates),
    };
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(service = %config.service_name, "Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Installs the global subscriber. `RUST_LOG` overrides the configured filter.
fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().flatten_event(true))
            .init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
