//! Payment entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payment lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    /// Database/string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        }
    }

    /// Parse from the database/string representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(PaymentStatus::Pending),
            "completed" => Some(PaymentStatus::Completed),
            "failed" => Some(PaymentStatus::Failed),
            _ => None,
        }
    }
}

/// A payment against an order
///
/// `order_id` is a foreign reference into the order service; payments
/// must not be committed unless that reference was verified to exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: Uuid,

    /// Foreign reference to the paid order
    pub order_id: String,

    /// Payment amount
    pub amount: f64,

    /// Current status
    pub status: PaymentStatus,
}

impl Payment {
    /// Creates a new pending payment with a generated identifier
    pub fn new(order_id: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id: order_id.into(),
            amount,
            status: PaymentStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_payment_is_pending() {
        let payment = Payment::new("o-1", 49.90);
        assert_eq!(payment.status, PaymentStatus::Pending);
        assert_eq!(payment.order_id, "o-1");
    }
}
