//! Cart route handlers.
//!
//! The cart is a single table shared by every client; there is no per-user
//! isolation. Adds merge into an existing line for the same product.

use axum::{
    Json,
    extract::{Path, State},
};
use minicart_core::{CartItemId, ProductId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::{CartRepository, ProductRepository, RepositoryError, cart::UpsertOutcome};
use crate::error::{AppError, Result};
use crate::models::CartView;
use crate::state::AppState;

/// Request body for adding a product to the cart.
///
/// Fields are optional so the handler can return a 400 with a useful message
/// instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    #[serde(rename = "productId")]
    pub product_id: Option<i64>,
    pub quantity: Option<i64>,
}

/// Request body for replacing a cart line's quantity.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub quantity: Option<i64>,
}

/// Response for a successful add, naming the affected cart line.
#[derive(Debug, Serialize)]
pub struct AddToCartResponse {
    pub message: String,
    pub id: CartItemId,
}

/// Generic acknowledgment response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Get the cart with per-line subtotals and the rounded total.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<CartView>> {
    let view = CartRepository::new(state.pool()).view().await?;
    Ok(Json(view))
}

/// Add a product to the cart, merging into an existing line if present.
///
/// Returns 400 when `productId` is missing and 404 when it references no
/// product. Quantity defaults to 1 and is not bounded above.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<AddToCartRequest>,
) -> Result<Json<AddToCartResponse>> {
    let Some(product_id) = body.product_id else {
        return Err(AppError::BadRequest("Product ID is required".to_string()));
    };
    let product_id = ProductId::new(product_id);
    let quantity = body.quantity.unwrap_or(1);

    if !ProductRepository::new(state.pool()).exists(product_id).await? {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    let outcome = CartRepository::new(state.pool())
        .upsert_item(product_id, quantity)
        .await?;

    let message = match outcome {
        UpsertOutcome::Merged(_) => "Cart updated successfully",
        UpsertOutcome::Inserted(_) => "Item added to cart",
    };

    Ok(Json(AddToCartResponse {
        message: message.to_string(),
        id: outcome.item_id(),
    }))
}

/// Replace a cart line's quantity.
///
/// Quantity must be at least 1; lower or missing values are rejected with a
/// 400 and the stored quantity is left unchanged.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateCartRequest>,
) -> Result<Json<MessageResponse>> {
    let quantity = match body.quantity {
        Some(q) if q >= 1 => q,
        _ => return Err(AppError::BadRequest("Valid quantity is required".to_string())),
    };

    CartRepository::new(state.pool())
        .set_quantity(CartItemId::new(id), quantity)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound("Cart item not found".to_string()),
            e => AppError::Database(e),
        })?;

    Ok(Json(MessageResponse {
        message: "Cart item updated".to_string(),
    }))
}

/// Remove a cart line.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    CartRepository::new(state.pool())
        .delete_item(CartItemId::new(id))
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound("Cart item not found".to_string()),
            e => AppError::Database(e),
        })?;

    Ok(Json(MessageResponse {
        message: "Item removed from cart".to_string(),
    }))
}
