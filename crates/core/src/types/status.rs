//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Order status.
///
/// Checkout in this system is a mock: there is no payment capture or
/// fulfillment pipeline, so every order is written as `completed`. The enum
/// exists so the wire value is typed rather than a free-form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Completed,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(Self::Completed),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}
