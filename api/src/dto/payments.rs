//! Payment DTOs

use serde::Deserialize;
use validator::Validate;

/// Request body for creating a payment
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePaymentRequest {
    #[validate(length(min = 1, max = 64))]
    pub order_id: String,

    #[validate(range(min = 0.01))]
    pub amount: f64,
}

/// Request body for updating a payment
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePaymentRequest {
    #[validate(range(min = 0.01))]
    pub amount: f64,

    /// One of "pending", "completed", "failed"
    #[validate(length(min = 1, max = 20))]
    pub status: String,
}
