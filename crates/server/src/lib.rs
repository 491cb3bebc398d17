//! Minicart server library.
//!
//! This crate provides the cart/checkout API as a library, allowing the
//! router to be exercised in tests without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the complete application with middleware layers applied.
///
/// CORS is wide open: the demo frontend is served from a separate origin
/// and the API carries no credentials.
pub fn app(state: AppState) -> Router {
    routes::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
