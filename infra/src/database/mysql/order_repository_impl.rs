//! MySQL implementation of the OrderRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ch_core::domain::entities::order::{Order, OrderStatus};
use ch_core::errors::DomainError;
use ch_core::repositories::OrderRepository;

/// MySQL-backed order repository
pub struct MySqlOrderRepository {
    pool: MySqlPool,
}

impl MySqlOrderRepository {
    /// Create a new MySQL order repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_order(row: &sqlx::mysql::MySqlRow) -> Result<Order, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;
        let status: String = row.try_get("status").map_err(|e| DomainError::Internal {
            message: format!("Failed to get status: {}", e),
        })?;

        Ok(Order {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid order UUID: {}", e),
            })?,
            user_id: row.try_get("user_id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get user_id: {}", e),
            })?,
            product_id: row.try_get("product_id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get product_id: {}", e),
            })?,
            quantity: row.try_get("quantity").map_err(|e| DomainError::Internal {
                message: format!("Failed to get quantity: {}", e),
            })?,
            status: OrderStatus::parse(&status).ok_or_else(|| DomainError::Internal {
                message: format!("Unknown order status: {}", status),
            })?,
        })
    }
}

#[async_trait]
impl OrderRepository for MySqlOrderRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let row = sqlx::query(
            "SELECT id, user_id, product_id, quantity, status FROM orders WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to find order: {}", e),
        })?;

        row.as_ref().map(Self::row_to_order).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        let rows = sqlx::query("SELECT id, user_id, product_id, quantity, status FROM orders")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list orders: {}", e),
            })?;

        rows.iter().map(Self::row_to_order).collect()
    }

    async fn create(&self, order: Order) -> Result<Order, DomainError> {
        sqlx::query(
            "INSERT INTO orders (id, user_id, product_id, quantity, status) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(order.id.to_string())
        .bind(&order.user_id)
        .bind(&order.product_id)
        .bind(order.quantity)
        .bind(order.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to create order: {}", e),
        })?;

        Ok(order)
    }

    async fn update(&self, order: Order) -> Result<Order, DomainError> {
        let result = sqlx::query(
            "UPDATE orders SET user_id = ?, product_id = ?, quantity = ?, status = ? WHERE id = ?",
        )
        .bind(&order.user_id)
        .bind(&order.product_id)
        .bind(order.quantity)
        .bind(order.status.as_str())
        .bind(order.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to update order: {}", e),
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("order {}", order.id),
            });
        }

        Ok(order)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete order: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
