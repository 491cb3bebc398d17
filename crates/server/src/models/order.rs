//! Checkout and order models.

use chrono::{DateTime, Utc};
use minicart_core::OrderStatus;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Customer details supplied with a checkout request.
///
/// `name` and `email` are required by the checkout handler; the remaining
/// fields are optional. Missing fields deserialize to their defaults so the
/// handler can reject them with a 400 rather than a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// One line of the client-supplied cart snapshot at checkout.
///
/// Only `quantity` and `price` participate in the total; everything else the
/// client sent is carried through unchanged and echoed back on the receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutItem {
    pub quantity: i64,
    pub price: f64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The receipt returned from a successful checkout.
///
/// Mirrors the persisted order plus the item snapshot from the request.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "customerInfo")]
    pub customer_info: CustomerInfo,
    pub items: Vec<CheckoutItem>,
    pub total: f64,
    pub status: OrderStatus,
}

/// A persisted order row, as returned by `GET /orders`.
///
/// Orders are immutable once created. Optional customer fields are stored as
/// empty strings when absent.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_address: String,
    pub customer_phone: String,
    pub total: f64,
    pub timestamp: DateTime<Utc>,
    pub status: String,
}
