//! Catalog product model.

use minicart_core::ProductId;
use serde::Serialize;
use sqlx::FromRow;

/// A catalog product.
///
/// Products are seeded once at startup and read-only to the service.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in dollars. Stored as `REAL`; never negative.
    pub price: f64,
    /// URL of the product image.
    pub image: String,
    pub description: String,
}
