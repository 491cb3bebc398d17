//! Cart repository for the single shared cart.
//!
//! The cart is one global table with at most one row per product, maintained
//! by merge-on-add rather than a uniqueness constraint. The add path is a
//! read-modify-write with no locking, so two concurrent adds for the same
//! product can lose an update. That matches the original design of this
//! system; see DESIGN.md.

use minicart_core::{CartItemId, ProductId, round_to_cents};
use sqlx::SqlitePool;

use super::RepositoryError;
use crate::models::{CartLine, CartView};

/// Result of an upsert: whether the delta was merged into an existing line
/// or a new line was inserted. Callers use this to pick the response message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// Quantity was added to an existing cart line.
    Merged(CartItemId),
    /// A new cart line was created.
    Inserted(CartItemId),
}

impl UpsertOutcome {
    /// The id of the affected cart line.
    #[must_use]
    pub const fn item_id(&self) -> CartItemId {
        match self {
            Self::Merged(id) | Self::Inserted(id) => *id,
        }
    }
}

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the cart lines joined with product fields, plus the total.
    ///
    /// The total is the sum of line subtotals rounded to two decimal places.
    /// An empty cart yields no lines and a total of 0.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn view(&self) -> Result<CartView, RepositoryError> {
        let items = sqlx::query_as::<_, CartLine>(
            r"
            SELECT ci.id, ci.quantity, p.id AS product_id, p.name, p.price, p.image,
                   (ci.quantity * p.price) AS subtotal
            FROM cart_items ci
            JOIN products p ON ci.product_id = p.id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        let total = round_to_cents(items.iter().map(|line| line.subtotal).sum());

        Ok(CartView { items, total })
    }

    /// Add `quantity_delta` of a product to the cart.
    ///
    /// If a line for the product already exists its quantity is incremented;
    /// otherwise a new line is inserted. There is no upper bound on quantity.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn upsert_item(
        &self,
        product_id: ProductId,
        quantity_delta: i64,
    ) -> Result<UpsertOutcome, RepositoryError> {
        let existing = sqlx::query_as::<_, (CartItemId, i64)>(
            r"
            SELECT id, quantity FROM cart_items WHERE product_id = ?
            ",
        )
        .bind(product_id)
        .fetch_optional(self.pool)
        .await?;

        if let Some((item_id, quantity)) = existing {
            sqlx::query(
                r"
                UPDATE cart_items SET quantity = ? WHERE product_id = ?
                ",
            )
            .bind(quantity + quantity_delta)
            .bind(product_id)
            .execute(self.pool)
            .await?;

            Ok(UpsertOutcome::Merged(item_id))
        } else {
            let result = sqlx::query(
                r"
                INSERT INTO cart_items (product_id, quantity) VALUES (?, ?)
                ",
            )
            .bind(product_id)
            .bind(quantity_delta)
            .execute(self.pool)
            .await?;

            Ok(UpsertOutcome::Inserted(CartItemId::new(
                result.last_insert_rowid(),
            )))
        }
    }

    /// Replace the stored quantity of a cart line.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no line has that id.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn set_quantity(
        &self,
        item_id: CartItemId,
        quantity: i64,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE cart_items SET quantity = ? WHERE id = ?
            ",
        )
        .bind(quantity)
        .bind(item_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Remove a cart line.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no line has that id.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete_item(&self, item_id: CartItemId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM cart_items WHERE id = ?
            ",
        )
        .bind(item_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Remove every cart line unconditionally.
    ///
    /// Used only as the tail step of checkout.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn clear(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_items").execute(self.pool).await?;
        Ok(())
    }
}
