//! Notification dispatch seam
//!
//! Persisting a notification and delivering it are separate concerns;
//! delivery implementations live in the infrastructure crate.

use async_trait::async_trait;

use crate::domain::entities::notification::Notification;
use crate::errors::DomainError;

/// Delivers a persisted notification to its recipient
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<(), DomainError>;
}
