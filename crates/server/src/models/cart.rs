//! Cart view models.
//!
//! A cart line is a cart row joined with its product. Subtotals and the cart
//! total are derived at read time and never persisted.

use minicart_core::{CartItemId, ProductId};
use serde::Serialize;
use sqlx::FromRow;

/// One cart row joined with its product's display fields.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CartLine {
    pub id: CartItemId,
    pub quantity: i64,
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub image: String,
    /// `quantity * price`, computed by the join query.
    pub subtotal: f64,
}

/// The full cart as returned by `GET /cart`.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartLine>,
    /// Sum of line subtotals, rounded to two decimal places.
    pub total: f64,
}
