//! MySQL repository implementations

mod notification_repository_impl;
mod order_repository_impl;
mod payment_repository_impl;
mod product_repository_impl;
mod user_repository_impl;

pub use notification_repository_impl::MySqlNotificationRepository;
pub use order_repository_impl::MySqlOrderRepository;
pub use payment_repository_impl::MySqlPaymentRepository;
pub use product_repository_impl::MySqlProductRepository;
pub use user_repository_impl::MySqlUserRepository;
