//! # Pizzeria API
//!
//! REST server for pizza catalog listings and order intake.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         API Server                                      │
//! │                                                                         │
//! │  Client ───► HTTP (3000) ───► Handlers ───► Services ───► SQLite       │
//! │                                                 │                       │
//! │                                                 ▼                       │
//! │                                          pizzeria-core                  │
//! │                                       (pricing, validation)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod dto;
mod error;
mod extract;
mod handlers;
mod response;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ApiConfig;
use crate::state::AppState;
use pizzeria_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting pizzeria API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        port = config.port,
        db_path = %config.database_path,
        "Configuration loaded"
    );

    // Connect to database (runs migrations)
    let db_config =
        DbConfig::new(&config.database_path).max_connections(config.db_max_connections);
    let db = Database::new(db_config).await?;
    info!("Connected to SQLite");

    // Build application
    let state = AppState::new(db);
    let app = routes::build_router(state);

    // Start server
    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!(%addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
