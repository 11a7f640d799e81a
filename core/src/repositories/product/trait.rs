//! Product repository trait

use async_trait::async_trait;

use crate::domain::entities::product::Product;
use crate::errors::DomainError;

/// Repository trait for Product entity persistence operations
///
/// Product identifiers are caller-supplied strings; creation fails with
/// a conflict when the identifier is already taken.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by its identifier
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, DomainError>;

    /// List all products
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;

    /// Create a new product
    async fn create(&self, product: Product) -> Result<Product, DomainError>;

    /// Update an existing product
    async fn update(&self, product: Product) -> Result<Product, DomainError>;

    /// Delete a product, returning whether a record was removed
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}
