//! Notification repository trait

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::notification::Notification;
use crate::errors::DomainError;

/// Repository trait for Notification entity persistence operations
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Find a notification by its identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Notification>, DomainError>;

    /// List all notifications
    async fn find_all(&self) -> Result<Vec<Notification>, DomainError>;

    /// Create a new notification
    async fn create(&self, notification: Notification) -> Result<Notification, DomainError>;

    /// Update an existing notification
    async fn update(&self, notification: Notification) -> Result<Notification, DomainError>;

    /// Delete a notification, returning whether a record was removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
