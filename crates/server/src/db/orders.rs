//! Order repository for checkout records.
//!
//! Orders are append-only; nothing updates or deletes them.

use sqlx::SqlitePool;

use super::RepositoryError;
use crate::models::{Order, Receipt};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist the order half of a checkout receipt.
    ///
    /// Optional customer fields are stored as empty strings.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, receipt: &Receipt) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO orders
                (id, customer_name, customer_email, customer_address,
                 customer_phone, total, timestamp, status)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&receipt.id)
        .bind(&receipt.customer_info.name)
        .bind(&receipt.customer_info.email)
        .bind(receipt.customer_info.address.as_deref().unwrap_or_default())
        .bind(receipt.customer_info.phone.as_deref().unwrap_or_default())
        .bind(receipt.total)
        .bind(receipt.timestamp)
        .bind(receipt.status.to_string())
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// List all orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(
            r"
            SELECT id, customer_name, customer_email, customer_address,
                   customer_phone, total, timestamp, status
            FROM orders
            ORDER BY timestamp DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }
}
