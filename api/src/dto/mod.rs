//! Request and response DTOs

pub mod auth;
pub mod notifications;
pub mod orders;
pub mod payments;
pub mod products;
pub mod users;
