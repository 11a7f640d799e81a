//! Peer service configuration
//!
//! Base URLs for the sibling CartHub services plus the retry policy
//! applied when verifying a foreign entity reference against its owner.

use serde::{Deserialize, Serialize};

/// Base URLs of the peer services this process talks to
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PeerServicesConfig {
    /// Auth service base URL (token verification endpoint)
    pub auth_service_url: String,

    /// Product service base URL (product availability reads)
    pub product_service_url: String,

    /// Order service base URL (order existence reads)
    pub order_service_url: String,
}

impl Default for PeerServicesConfig {
    fn default() -> Self {
        Self {
            auth_service_url: String::from("http://auth-service:8080"),
            product_service_url: String::from("http://product-service:8081"),
            order_service_url: String::from("http://order-service:8083"),
        }
    }
}

impl PeerServicesConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            auth_service_url: std::env::var("AUTH_SERVICE_URL")
                .unwrap_or(defaults.auth_service_url),
            product_service_url: std::env::var("PRODUCT_SERVICE_URL")
                .unwrap_or(defaults.product_service_url),
            order_service_url: std::env::var("ORDER_SERVICE_URL")
                .unwrap_or(defaults.order_service_url),
        }
    }
}

/// Retry policy for dependency verification calls
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Total attempts before giving up
    pub max_attempts: u32,

    /// Per-attempt timeout in seconds
    pub attempt_timeout_secs: u64,

    /// Fixed delay between attempts in seconds
    pub retry_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            attempt_timeout_secs: 5,
            retry_delay_secs: 2,
        }
    }
}

impl RetryConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_attempts: std::env::var("VERIFY_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_attempts),
            attempt_timeout_secs: std::env::var("VERIFY_ATTEMPT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.attempt_timeout_secs),
            retry_delay_secs: std::env::var("VERIFY_RETRY_DELAY_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.retry_delay_secs),
        }
    }
}
