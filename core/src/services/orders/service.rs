//! Order service composing dependency verification and persistence

use std::sync::Arc;
use tracing::info;

use crate::domain::entities::order::Order;
use crate::domain::value_objects::EntityRef;
use crate::errors::DomainError;
use crate::repositories::OrderRepository;
use crate::services::dependency::DependencyVerifier;

/// Input for an order creation request
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// Authenticated subject placing the order
    pub user_id: String,
    /// Foreign reference to the ordered product
    pub product_id: String,
    pub quantity: i32,
}

/// Orchestrates order creation
///
/// The product reference is verified against the product service before
/// anything touches storage; an unavailable product rejects the write.
/// If the persistence write itself fails after a successful check, the
/// storage error surfaces as-is; there is no compensation step.
pub struct OrderService<R: OrderRepository> {
    repository: Arc<R>,
    verifier: DependencyVerifier,
}

impl<R: OrderRepository> OrderService<R> {
    /// Creates a new order service
    pub fn new(repository: Arc<R>, verifier: DependencyVerifier) -> Self {
        Self {
            repository,
            verifier,
        }
    }

    /// Creates an order after confirming the product is available
    ///
    /// # Returns
    ///
    /// * `Ok(Order)` - The persisted order
    /// * `Err(DomainError::PreconditionFailed)` - Product unavailable after retries
    /// * `Err(DomainError)` - Storage failure
    pub async fn create_order(
        &self,
        new_order: NewOrder,
        token: Option<&str>,
    ) -> Result<Order, DomainError> {
        let product_ref = EntityRef::product(new_order.product_id.clone());

        if !self.verifier.check_available(&product_ref, token).await {
            return Err(DomainError::PreconditionFailed {
                resource: format!("product {}", new_order.product_id),
            });
        }

        let order = Order::new(new_order.user_id, new_order.product_id, new_order.quantity);
        let order = self.repository.create(order).await?;

        info!(order_id = %order.id, product_id = %order.product_id, "order created");
        Ok(order)
    }
}
