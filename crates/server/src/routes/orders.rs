//! Order history route handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::db::OrderRepository;
use crate::error::Result;
use crate::models::Order;
use crate::state::AppState;

/// List all orders, newest first.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.pool()).list().await?;
    Ok(Json(orders))
}
