//! Product route handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::db::ProductRepository;
use crate::error::Result;
use crate::models::Product;
use crate::state::AppState;

/// List all products in the catalog.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(products))
}
