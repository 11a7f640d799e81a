//! # CartHub Infrastructure
//!
//! Database repositories, HTTP clients for peer services, and
//! notification delivery. Everything here implements an interface
//! defined by the core crate.

pub mod database;
pub mod http;
pub mod notify;

use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("HTTP client error: {0}")]
    Http(String),
}
