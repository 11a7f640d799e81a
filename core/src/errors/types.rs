//! Token-specific error types
//!
//! These errors represent the verification failure taxonomy of the token
//! authority. HTTP status mapping is handled in the presentation layer.

use thiserror::Error;

/// Token verification and issuance errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Malformed token")]
    Malformed,

    #[error("Token signature verification failed")]
    BadSignature,

    #[error("Token generation failed")]
    GenerationFailed,
}
