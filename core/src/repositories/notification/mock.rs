//! In-memory implementation of NotificationRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::notification::Notification;
use crate::errors::DomainError;

use super::trait_::NotificationRepository;

/// Mock notification repository backed by a HashMap
pub struct MockNotificationRepository {
    notifications: Arc<RwLock<HashMap<Uuid, Notification>>>,
}

impl MockNotificationRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            notifications: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockNotificationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationRepository for MockNotificationRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Notification>, DomainError> {
        let notifications = self.notifications.read().await;
        Ok(notifications.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Notification>, DomainError> {
        let notifications = self.notifications.read().await;
        Ok(notifications.values().cloned().collect())
    }

    async fn create(&self, notification: Notification) -> Result<Notification, DomainError> {
        let mut notifications = self.notifications.write().await;
        notifications.insert(notification.id, notification.clone());
        Ok(notification)
    }

    async fn update(&self, notification: Notification) -> Result<Notification, DomainError> {
        let mut notifications = self.notifications.write().await;

        if !notifications.contains_key(&notification.id) {
            return Err(DomainError::NotFound {
                resource: format!("notification {}", notification.id),
            });
        }

        notifications.insert(notification.id, notification.clone());
        Ok(notification)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut notifications = self.notifications.write().await;
        Ok(notifications.remove(&id).is_some())
    }
}
