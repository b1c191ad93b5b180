//! Fund Directory - API Server Binary
//!
//! This binary starts the HTTP API server for the Golden Visa fund directory.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin gv-funds-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=8080 API_FUNDS_PATH=funds.json cargo run --bin gv-funds-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_FUNDS_PATH` - Path to the fund catalog JSON snapshot
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_fund::{FundCatalog, InMemoryFundCatalog};
use interface_api::{config::ApiConfig, create_router};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, loads the fund catalog
/// snapshot, and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The fund catalog snapshot cannot be read or parsed
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = load_config();

    // Initialize tracing/logging
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Golden Visa fund directory API server"
    );

    // Load the fund catalog
    let catalog = load_catalog(&config)?;

    // Create the API router
    let app = create_router(catalog, config.clone());

    // Parse server address
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("invalid server address")?;

    tracing::info!(%addr, "Server listening");

    // Create TCP listener and serve
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to default values if environment variables are not set.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| ApiConfig {
        host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        port: std::env::var("API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080),
        funds_path: std::env::var("API_FUNDS_PATH").ok(),
        log_level: std::env::var("API_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Loads the fund catalog snapshot configured via `API_FUNDS_PATH`.
///
/// Starts with an empty catalog when no snapshot is configured, which keeps
/// local development possible without data.
fn load_catalog(config: &ApiConfig) -> anyhow::Result<Arc<dyn FundCatalog>> {
    let catalog = match &config.funds_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading fund snapshot {path}"))?;
            let catalog = InMemoryFundCatalog::from_json(&json)
                .with_context(|| format!("parsing fund snapshot {path}"))?;
            tracing::info!(path = %path, fund_count = catalog.len(), "Fund catalog loaded");
            catalog
        }
        None => {
            tracing::warn!("API_FUNDS_PATH not set; serving an empty catalog");
            InMemoryFundCatalog::default()
        }
    };
    Ok(Arc::new(catalog))
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
