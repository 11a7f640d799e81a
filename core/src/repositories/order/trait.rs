//! Order repository trait

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::order::Order;
use crate::errors::DomainError;

/// Repository trait for Order entity persistence operations
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find an order by its identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError>;

    /// List all orders
    async fn find_all(&self) -> Result<Vec<Order>, DomainError>;

    /// Create a new order
    async fn create(&self, order: Order) -> Result<Order, DomainError>;

    /// Update an existing order
    async fn update(&self, order: Order) -> Result<Order, DomainError>;

    /// Delete an order, returning whether a record was removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
