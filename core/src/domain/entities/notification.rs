//! Notification entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-facing notification record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier
    pub id: Uuid,

    /// The user the notification is addressed to
    pub user_id: String,

    /// Notification body
    pub message: String,

    /// Delivery status
    pub status: String,
}

impl Notification {
    /// Creates a new notification with a generated identifier
    pub fn new(user_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            message: message.into(),
            status: "pending".to_string(),
        }
    }
}
