//! In-memory implementation of OrderRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::order::Order;
use crate::errors::DomainError;

use super::trait_::OrderRepository;

/// Mock order repository backed by a HashMap
pub struct MockOrderRepository {
    orders: Arc<RwLock<HashMap<Uuid, Order>>>,
}

impl MockOrderRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored orders (test assertions)
    pub async fn count(&self) -> usize {
        self.orders.read().await.len()
    }
}

impl Default for MockOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for MockOrderRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders.values().cloned().collect())
    }

    async fn create(&self, order: Order) -> Result<Order, DomainError> {
        let mut orders = self.orders.write().await;
        orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn update(&self, order: Order) -> Result<Order, DomainError> {
        let mut orders = self.orders.write().await;

        if !orders.contains_key(&order.id) {
            return Err(DomainError::NotFound {
                resource: format!("order {}", order.id),
            });
        }

        orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut orders = self.orders.write().await;
        Ok(orders.remove(&id).is_some())
    }
}
