//! Checkout route handler.
//!
//! Checkout is a mock: it validates the request, computes the total from the
//! client-supplied item snapshot, and returns a receipt. The order insert and
//! the cart clear are best-effort side steps; failures there are logged and
//! never surfaced, so the client sees success once validation passes. The
//! total is summed from the prices the client sent, not re-read from the
//! store. Both behaviors are carried over deliberately; see DESIGN.md.

use axum::{Json, extract::State};
use chrono::Utc;
use minicart_core::{OrderStatus, round_to_cents};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use crate::db::{CartRepository, OrderRepository};
use crate::error::{AppError, Result};
use crate::models::{CheckoutItem, CustomerInfo, Receipt};
use crate::state::AppState;

/// Request body for checkout.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default, rename = "cartItems")]
    pub cart_items: Vec<CheckoutItem>,
    #[serde(default, rename = "customerInfo")]
    pub customer_info: CustomerInfo,
}

/// Convert the cart snapshot into a receipt and a persisted order, then
/// empty the cart.
///
/// Returns 400 when the snapshot is empty or the customer name/email is
/// missing. Persistence failures after validation do not fail the request.
#[instrument(skip(state, body))]
pub async fn checkout(
    State(state): State<AppState>,
    Json(body): Json<CheckoutRequest>,
) -> Result<Json<Receipt>> {
    if body.cart_items.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".to_string()));
    }

    if body.customer_info.name.trim().is_empty() || body.customer_info.email.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Customer name and email are required".to_string(),
        ));
    }

    #[allow(clippy::cast_precision_loss)]
    let total = round_to_cents(
        body.cart_items
            .iter()
            .map(|item| item.quantity as f64 * item.price)
            .sum(),
    );

    let receipt = Receipt {
        id: Uuid::new_v4().to_string(),
        timestamp: Utc::now(),
        customer_info: body.customer_info,
        items: body.cart_items,
        total,
        status: OrderStatus::Completed,
    };

    // Order insert and cart clear are two independent statements with no
    // transaction spanning them. Either can fail while the other succeeds;
    // the receipt is returned regardless.
    if let Err(e) = OrderRepository::new(state.pool()).insert(&receipt).await {
        tracing::error!(order_id = %receipt.id, error = %e, "Failed to save order");
    }

    if let Err(e) = CartRepository::new(state.pool()).clear().await {
        tracing::error!(error = %e, "Failed to clear cart after checkout");
    }

    Ok(Json(receipt))
}
