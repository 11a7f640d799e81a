//! MySQL implementation of the PaymentRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ch_core::domain::entities::payment::{Payment, PaymentStatus};
use ch_core::errors::DomainError;
use ch_core::repositories::PaymentRepository;

/// MySQL-backed payment repository
pub struct MySqlPaymentRepository {
    pool: MySqlPool,
}

impl MySqlPaymentRepository {
    /// Create a new MySQL payment repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_payment(row: &sqlx::mysql::MySqlRow) -> Result<Payment, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;
        let status: String = row.try_get("status").map_err(|e| DomainError::Internal {
            message: format!("Failed to get status: {}", e),
        })?;

        Ok(Payment {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid payment UUID: {}", e),
            })?,
            order_id: row.try_get("order_id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get order_id: {}", e),
            })?,
            amount: row.try_get("amount").map_err(|e| DomainError::Internal {
                message: format!("Failed to get amount: {}", e),
            })?,
            status: PaymentStatus::parse(&status).ok_or_else(|| DomainError::Internal {
                message: format!("Unknown payment status: {}", status),
            })?,
        })
    }
}

#[async_trait]
impl PaymentRepository for MySqlPaymentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Payment>, DomainError> {
        let row = sqlx::query("SELECT id, order_id, amount, status FROM payments WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find payment: {}", e),
            })?;

        row.as_ref().map(Self::row_to_payment).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Payment>, DomainError> {
        let rows = sqlx::query("SELECT id, order_id, amount, status FROM payments")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list payments: {}", e),
            })?;

        rows.iter().map(Self::row_to_payment).collect()
    }

    async fn create(&self, payment: Payment) -> Result<Payment, DomainError> {
        sqlx::query("INSERT INTO payments (id, order_id, amount, status) VALUES (?, ?, ?, ?)")
            .bind(payment.id.to_string())
            .bind(&payment.order_id)
            .bind(payment.amount)
            .bind(payment.status.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to create payment: {}", e),
            })?;

        Ok(payment)
    }

    async fn update(&self, payment: Payment) -> Result<Payment, DomainError> {
        let result = sqlx::query(
            "UPDATE payments SET order_id = ?, amount = ?, status = ? WHERE id = ?",
        )
        .bind(&payment.order_id)
        .bind(payment.amount)
        .bind(payment.status.as_str())
        .bind(payment.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to update payment: {}", e),
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("payment {}", payment.id),
            });
        }

        Ok(payment)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM payments WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete payment: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
