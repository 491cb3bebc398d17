//! Minicart Server - Cart and checkout API.
//!
//! This binary serves the demo storefront JSON API on port 5000.
//!
//! # Architecture
//!
//! - Axum web framework, JSON request/response bodies
//! - `SQLite` for products, the shared cart, and order history
//! - CORS open to any origin; the browser frontend is a separate app
//!
//! The cart is a single global table shared by all clients. There is no
//! authentication, payment processing, or inventory tracking.

#![cfg_attr(not(test), forbid(unsafe_code))]

use minicart_server::config::ServerConfig;
use minicart_server::state::AppState;
use minicart_server::{app, db};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "minicart_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize database connection pool
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    // Create tables and seed the demo catalog
    db::init_schema(&pool).await.expect("Failed to create schema");
    db::seed::seed_products(&pool)
        .await
        .expect("Failed to seed catalog");

    // Build application state and router
    let state = AppState::new(config.clone(), pool);
    let router = app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("minicart listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
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
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
