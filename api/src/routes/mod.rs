//! Route handlers
//!
//! Every handler is generic over the repository implementations so the
//! same surface runs against MySQL in production and the in-memory
//! mocks in tests.

pub mod auth;
pub mod notifications;
pub mod orders;
pub mod payments;
pub mod products;
pub mod users;

use std::sync::Arc;

use ch_core::repositories::{
    NotificationRepository, OrderRepository, PaymentRepository, ProductRepository, UserRepository,
};
use ch_core::services::notifications::NotificationSender;
use ch_core::services::orders::OrderService;
use ch_core::services::payments::PaymentService;
use ch_core::services::token::TokenService;

/// Application state shared across all route handlers
pub struct AppState<U, P, O, Y, N>
where
    U: UserRepository,
    P: ProductRepository,
    O: OrderRepository,
    Y: PaymentRepository,
    N: NotificationRepository,
{
    pub token_service: Arc<TokenService>,
    pub user_repository: Arc<U>,
    pub product_repository: Arc<P>,
    pub order_repository: Arc<O>,
    pub payment_repository: Arc<Y>,
    pub notification_repository: Arc<N>,
    pub order_service: Arc<OrderService<O>>,
    pub payment_service: Arc<PaymentService<Y>>,
    pub notification_sender: Arc<dyn NotificationSender>,
}
