//! API process configuration

use ch_shared::config::{DatabaseConfig, JwtConfig, PeerServicesConfig, RetryConfig, ServerConfig};
use std::env;

/// How this process verifies presented tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// In-process verification (this process hosts the token authority)
    Local,
    /// Delegation to the auth service over HTTP
    Remote,
}

impl AuthMode {
    fn from_env() -> Self {
        match env::var("AUTH_MODE").as_deref() {
            Ok("remote") => AuthMode::Remote,
            _ => AuthMode::Local,
        }
    }
}

/// Complete configuration for one CartHub service process
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub peers: PeerServicesConfig,
    pub retry: RetryConfig,
    pub auth_mode: AuthMode,
}

impl ApiConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            peers: PeerServicesConfig::from_env(),
            retry: RetryConfig::from_env(),
            auth_mode: AuthMode::from_env(),
        }
    }
}
