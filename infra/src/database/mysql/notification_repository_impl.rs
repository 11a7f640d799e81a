//! MySQL implementation of the NotificationRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ch_core::domain::entities::notification::Notification;
use ch_core::errors::DomainError;
use ch_core::repositories::NotificationRepository;

/// MySQL-backed notification repository
pub struct MySqlNotificationRepository {
    pool: MySqlPool,
}

impl MySqlNotificationRepository {
    /// Create a new MySQL notification repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_notification(row: &sqlx::mysql::MySqlRow) -> Result<Notification, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(Notification {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid notification UUID: {}", e),
            })?,
            user_id: row.try_get("user_id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get user_id: {}", e),
            })?,
            message: row.try_get("message").map_err(|e| DomainError::Internal {
                message: format!("Failed to get message: {}", e),
            })?,
            status: row.try_get("status").map_err(|e| DomainError::Internal {
                message: format!("Failed to get status: {}", e),
            })?,
        })
    }
}

#[async_trait]
impl NotificationRepository for MySqlNotificationRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Notification>, DomainError> {
        let row = sqlx::query(
            "SELECT id, user_id, message, status FROM notifications WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to find notification: {}", e),
        })?;

        row.as_ref().map(Self::row_to_notification).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Notification>, DomainError> {
        let rows = sqlx::query("SELECT id, user_id, message, status FROM notifications")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list notifications: {}", e),
            })?;

        rows.iter().map(Self::row_to_notification).collect()
    }

    async fn create(&self, notification: Notification) -> Result<Notification, DomainError> {
        sqlx::query(
            "INSERT INTO notifications (id, user_id, message, status) VALUES (?, ?, ?, ?)",
        )
        .bind(notification.id.to_string())
        .bind(&notification.user_id)
        .bind(&notification.message)
        .bind(&notification.status)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to create notification: {}", e),
        })?;

        Ok(notification)
    }

    async fn update(&self, notification: Notification) -> Result<Notification, DomainError> {
        let result = sqlx::query(
            "UPDATE notifications SET user_id = ?, message = ?, status = ? WHERE id = ?",
        )
        .bind(&notification.user_id)
        .bind(&notification.message)
        .bind(&notification.status)
        .bind(notification.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to update notification: {}", e),
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("notification {}", notification.id),
            });
        }

        Ok(notification)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete notification: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
