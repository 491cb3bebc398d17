//! Product repository for catalog queries.
//!
//! The catalog is seeded at startup (see [`super::seed`]) and read-only
//! afterwards, so this repository only queries.

use minicart_core::ProductId;
use sqlx::SqlitePool;

use super::RepositoryError;
use crate::models::Product;

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all products in store-assigned (id) order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, price, image, description
            FROM products
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Check whether a product exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn exists(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM products WHERE id = ?)
            ",
        )
        .bind(id)
        .fetch_one(self.pool)
        .await?;

        Ok(exists)
    }
}
