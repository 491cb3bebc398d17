//! HTTP route handlers for the cart/checkout API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health        - Liveness check
//! GET    /health/ready  - Readiness check (verifies database)
//!
//! GET    /products      - List the catalog
//! GET    /cart          - Cart lines with subtotals and total
//! POST   /cart          - Add a product (merges into an existing line)
//! PUT    /cart/{id}     - Replace a line's quantity
//! DELETE /cart/{id}     - Remove a line
//! POST   /checkout      - Mock checkout: receipt + order record
//! GET    /orders        - Order history, newest first
//! ```

pub mod cart;
pub mod checkout;
pub mod orders;
pub mod products;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the API.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route("/products", get(products::index))
        .route("/cart", get(cart::show).post(cart::add))
        .route("/cart/{id}", axum::routing::put(cart::update).delete(cart::remove))
        .route("/checkout", post(checkout::checkout))
        .route("/orders", get(orders::index))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
