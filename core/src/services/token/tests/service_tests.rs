//! Unit tests for the token authority

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenConfig, TokenService};

fn test_service() -> TokenService {
    TokenService::new(TokenConfig {
        secret: "test-secret".to_string(),
        token_expiry: 86_400,
        issuer: "carthub".to_string(),
    })
}

#[test]
fn test_issue_then_verify_returns_subject() {
    let service = test_service();

    let token = service.issue("user-42").unwrap();
    let subject = service.verify(&token).unwrap();

    assert_eq!(subject, "user-42");
}

#[test]
fn test_issue_rejects_empty_subject() {
    let service = test_service();

    let result = service.issue("");
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[test]
fn test_tampered_signature_is_rejected() {
    let service = test_service();
    let token = service.issue("user-42").unwrap();

    // Flip the last character of the signature segment
    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let result = service.verify(&tampered);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::BadSignature))
    ));
}

#[test]
fn test_token_signed_with_other_secret_is_rejected() {
    let issuer = TokenService::new(TokenConfig {
        secret: "other-secret".to_string(),
        token_expiry: 86_400,
        issuer: "carthub".to_string(),
    });
    let verifier = test_service();

    let token = issuer.issue("user-42").unwrap();
    let result = verifier.verify(&token);

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::BadSignature))
    ));
}

#[test]
fn test_expired_token_is_rejected() {
    let service = test_service();

    // Encode claims whose expiry already passed
    let claims = Claims::new("user-42", -120);
    let token = service.encode(&claims).unwrap();

    let result = service.verify(&token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Expired))
    ));
}

#[test]
fn test_garbage_token_is_malformed() {
    let service = test_service();

    let result = service.verify("not-a-token");
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Malformed))
    ));
}

#[tokio::test]
async fn test_local_verifier_delegates_to_service() {
    use crate::services::token::{LocalTokenVerifier, TokenVerifier};
    use std::sync::Arc;

    let service = Arc::new(test_service());
    let token = service.issue("user-7").unwrap();

    let verifier = LocalTokenVerifier::new(service);
    assert_eq!(verifier.verify(&token).await.unwrap(), "user-7");
    assert!(verifier.verify("garbage").await.is_err());
}
