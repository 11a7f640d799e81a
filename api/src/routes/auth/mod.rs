//! Authentication route handlers
//!
//! - `POST /api/v1/auth/login` issues a token for the supplied user id
//! - `POST /api/v1/auth/verify-token` is the network half of the
//!   delegation contract consumed by peer services

pub mod login;
pub mod verify_token;
