//! Order DTOs

use serde::Deserialize;
use validator::Validate;

/// Request body for creating an order
///
/// The ordering user comes from the verified identity, not the payload.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, max = 64))]
    pub product_id: String,

    #[validate(range(min = 1))]
    pub quantity: i32,
}

/// Request body for updating an order
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOrderRequest {
    #[validate(range(min = 1))]
    pub quantity: i32,

    /// One of "pending", "confirmed", "cancelled"
    #[validate(length(min = 1, max = 20))]
    pub status: String,
}
