//! Configuration modules for CartHub services.
//!
//! Each service composes the pieces it needs; components receive their
//! configuration by constructor parameter and never read process globals.

pub mod auth;
pub mod database;
pub mod peers;
pub mod server;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use peers::{PeerServicesConfig, RetryConfig};
pub use server::ServerConfig;
