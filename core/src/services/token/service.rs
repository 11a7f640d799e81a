//! Token issuance and verification

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenConfig;

/// Service issuing and verifying signed identity tokens
///
/// Both halves are CPU-bound; a single instance is shared across request
/// workers without synchronization.
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from the given configuration
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;
        // A token whose expiry has passed is rejected immediately, without
        // the library's default grace window.
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed token for the given subject
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded token, valid for the configured window
    /// * `Err(DomainError)` - Empty subject or signing failure
    pub fn issue(&self, subject: &str) -> Result<String, DomainError> {
        if subject.is_empty() {
            return Err(DomainError::Validation {
                message: "token subject must not be empty".to_string(),
            });
        }

        let claims = Claims::new(subject, self.config.token_expiry);
        self.encode(&claims)
    }

    /// Verifies a token and returns the embedded subject
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The subject the token was issued for
    /// * `Err(DomainError)` - `Expired`, `BadSignature`, or `Malformed`
    pub fn verify(&self, token: &str) -> Result<String, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        DomainError::Token(TokenError::Expired)
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        DomainError::Token(TokenError::BadSignature)
                    }
                    _ => DomainError::Token(TokenError::Malformed),
                }
            })?;

        Ok(token_data.claims.sub)
    }

    /// Token validity window in seconds
    pub fn token_expiry(&self) -> i64 {
        self.config.token_expiry
    }

    pub(crate) fn encode(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }
}
