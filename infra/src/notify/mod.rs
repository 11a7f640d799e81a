//! Notification delivery implementations

use async_trait::async_trait;
use tracing::info;

use ch_core::domain::entities::notification::Notification;
use ch_core::errors::DomainError;
use ch_core::services::notifications::NotificationSender;

/// Delivery backend that writes notifications to the service log
///
/// Stands in for email/SMS delivery; swapping in a real channel means
/// implementing `NotificationSender` and changing the wiring.
pub struct LogNotificationSender;

impl LogNotificationSender {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogNotificationSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSender for LogNotificationSender {
    async fn send(&self, notification: &Notification) -> Result<(), DomainError> {
        info!(
            user_id = %notification.user_id,
            message = %notification.message,
            "sending notification"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_sender_always_succeeds() {
        let sender = LogNotificationSender::new();
        let notification = Notification::new("u-1", "your order shipped");
        assert!(sender.send(&notification).await.is_ok());
    }
}
