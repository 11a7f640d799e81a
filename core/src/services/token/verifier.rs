//! Token verification seam used by the delegation middleware
//!
//! Services that host the token authority verify in-process; the others
//! call the auth service over HTTP through an implementation living in
//! the infrastructure crate. The middleware only sees this trait.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::DomainError;

use super::service::TokenService;

/// Resolves a presented token to its subject
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify the token and return the subject it was issued for
    async fn verify(&self, token: &str) -> Result<String, DomainError>;
}

/// In-process verification against the local token authority
pub struct LocalTokenVerifier {
    service: Arc<TokenService>,
}

impl LocalTokenVerifier {
    pub fn new(service: Arc<TokenService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl TokenVerifier for LocalTokenVerifier {
    async fn verify(&self, token: &str) -> Result<String, DomainError> {
        self.service.verify(token)
    }
}
