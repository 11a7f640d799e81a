//! Notification DTOs

use serde::Deserialize;
use validator::Validate;

/// Request body for creating a notification
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,

    #[validate(length(min = 1, max = 1000))]
    pub message: String,
}

/// Request body for updating a notification
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateNotificationRequest {
    #[validate(length(min = 1, max = 1000))]
    pub message: String,

    #[validate(length(min = 1, max = 20))]
    pub status: String,
}
