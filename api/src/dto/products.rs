//! Product DTOs

use serde::Deserialize;
use validator::Validate;

/// Request body for creating a product
///
/// The identifier is caller-supplied so peers can reference it.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 64))]
    pub id: String,

    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub category: String,

    #[validate(range(min = 0.0))]
    pub price: f64,
}

/// Request body for updating a product
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub category: String,

    #[validate(range(min = 0.0))]
    pub price: f64,
}
