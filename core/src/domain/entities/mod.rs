//! Domain entities
//!
//! Plain records owned by the persistence layer. Orders and payments are
//! the only entities with creation-time business rules (dependency
//! verification); the rest are straight CRUD.

pub mod notification;
pub mod order;
pub mod payment;
pub mod product;
pub mod token;
pub mod user;

pub use notification::Notification;
pub use order::Order;
pub use payment::Payment;
pub use product::Product;
pub use token::Claims;
pub use user::User;
