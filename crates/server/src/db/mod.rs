//! Database operations for the `SQLite` cart store.
//!
//! # Tables
//!
//! - `products` - Seeded demo catalog, read-only after startup
//! - `cart_items` - The single shared cart, one row per distinct product
//! - `orders` - Completed mock checkouts, append-only
//!
//! The schema is created with `CREATE TABLE IF NOT EXISTS` on startup; there
//! is no external migration runner for this demo.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub mod cart;
pub mod orders;
pub mod products;
pub mod seed;

pub use cart::CartRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// The database file is created if it does not exist.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be
/// established.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Create the schema if it does not already exist.
///
/// # Errors
///
/// Returns `sqlx::Error` if any DDL statement fails.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(
        r"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            image TEXT,
            description TEXT
        );

        CREATE TABLE IF NOT EXISTS cart_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            product_id INTEGER,
            quantity INTEGER DEFAULT 1,
            FOREIGN KEY (product_id) REFERENCES products (id)
        );

        CREATE TABLE IF NOT EXISTS orders (
            id TEXT PRIMARY KEY,
            customer_name TEXT,
            customer_email TEXT,
            customer_address TEXT,
            customer_phone TEXT,
            total REAL,
            timestamp TEXT,
            status TEXT DEFAULT 'completed'
        );
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}
