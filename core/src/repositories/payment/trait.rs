//! Payment repository trait

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::payment::Payment;
use crate::errors::DomainError;

/// Repository trait for Payment entity persistence operations
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Find a payment by its identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Payment>, DomainError>;

    /// List all payments
    async fn find_all(&self) -> Result<Vec<Payment>, DomainError>;

    /// Create a new payment
    async fn create(&self, payment: Payment) -> Result<Payment, DomainError>;

    /// Update an existing payment
    async fn update(&self, payment: Payment) -> Result<Payment, DomainError>;

    /// Delete a payment, returning whether a record was removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
