//! Token service configuration

use ch_shared::config::JwtConfig;

/// Configuration for the token authority
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Symmetric signing secret shared by every service
    pub secret: String,

    /// Token validity window in seconds
    pub token_expiry: i64,

    /// Issuer claim embedded in every token
    pub issuer: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self::from(&JwtConfig::default())
    }
}

impl From<&JwtConfig> for TokenConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            token_expiry: config.token_expiry,
            issuer: config.issuer.clone(),
        }
    }
}
