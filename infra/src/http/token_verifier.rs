//! Remote token verification against the auth service

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use ch_core::errors::DomainError;
use ch_core::services::token::TokenVerifier;

/// Wire request for the auth service's verify-token endpoint
#[derive(Debug, Serialize)]
struct VerifyTokenRequest<'a> {
    token: &'a str,
}

/// Wire response carrying the verified subject
#[derive(Debug, Deserialize)]
struct VerifiedToken {
    user_id: String,
}

/// Token verification over HTTP, for services that do not host the
/// token authority themselves
///
/// An unreachable authority, a non-2xx response, and an unparsable body
/// all surface as `Unauthorized`; the caller cannot tell them apart,
/// but the log level distinguishes transport trouble from bad tokens.
pub struct RemoteTokenVerifier {
    client: reqwest::Client,
    verify_url: String,
}

impl RemoteTokenVerifier {
    /// Create a verifier pointed at the given auth service base URL
    pub fn new(auth_service_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            verify_url: format!(
                "{}/api/v1/auth/verify-token",
                auth_service_url.trim_end_matches('/')
            ),
        }
    }
}

#[async_trait]
impl TokenVerifier for RemoteTokenVerifier {
    async fn verify(&self, token: &str) -> Result<String, DomainError> {
        let response = self
            .client
            .post(&self.verify_url)
            .json(&VerifyTokenRequest { token })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "token verification transport failure");
                DomainError::Unauthorized
            })?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "auth service rejected token");
            return Err(DomainError::Unauthorized);
        }

        let verified: VerifiedToken = response.json().await.map_err(|e| {
            warn!(error = %e, "unparsable verify-token response");
            DomainError::Unauthorized
        })?;

        Ok(verified.user_id)
    }
}
