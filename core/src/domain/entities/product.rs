//! Product entity

use serde::{Deserialize, Serialize};

/// A product in the catalog
///
/// Product identifiers are supplied by the caller at creation time and
/// referenced by orders across the service boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (caller-supplied, e.g. "p-123")
    pub id: String,

    /// Product name
    pub name: String,

    /// Product category
    pub category: String,

    /// Unit price
    pub price: f64,
}
