//! Order entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl OrderStatus {
    /// Database/string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Parse from the database/string representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(OrderStatus::Pending),
            "confirmed" => Some(OrderStatus::Confirmed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

/// An order placed by a user for a product
///
/// `product_id` is a foreign reference into the product service; orders
/// must not be committed unless that reference was verified available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier
    pub id: Uuid,

    /// The user who placed the order
    pub user_id: String,

    /// Foreign reference to the ordered product
    pub product_id: String,

    /// Quantity ordered
    pub quantity: i32,

    /// Current status
    pub status: OrderStatus,
}

impl Order {
    /// Creates a new pending order with a generated identifier
    pub fn new(
        user_id: impl Into<String>,
        product_id: impl Into<String>,
        quantity: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            product_id: product_id.into(),
            quantity,
            status: OrderStatus::Pending,
        }
    }
}
