//! Retry policy for dependency verification

use std::time::Duration;

use ch_shared::config::RetryConfig;

/// Bounded retry policy applied to each verification call
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts before reporting the dependency unavailable
    pub max_attempts: u32,

    /// Independent timeout applied to every attempt
    pub attempt_timeout: Duration,

    /// Fixed delay between attempts (none after the final attempt)
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            attempt_timeout: Duration::from_secs(5),
            retry_delay: Duration::from_secs(2),
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            attempt_timeout: Duration::from_secs(config.attempt_timeout_secs),
            retry_delay: Duration::from_secs(config.retry_delay_secs),
        }
    }
}
