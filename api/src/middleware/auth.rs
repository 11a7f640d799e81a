//! Delegation middleware for protected endpoints.
//!
//! Extracts the caller's token from the Authorization header, resolves
//! its subject through the configured verifier, and injects the verified
//! identity into the request. The verification source is a trait object:
//! in-process against the local token authority, or over HTTP against a
//! separate auth service; the middleware cannot tell the difference.
//!
//! Verification is single-attempt. A transient authority failure surfaces
//! immediately as 401; the caller retries the whole request if it cares.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use ch_core::services::token::TokenVerifier;

/// Verified caller identity injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Subject the presented token was issued for
    pub user_id: String,
    /// The raw token, forwarded on cross-service dependency reads
    pub token: String,
}

/// Delegation middleware factory
pub struct TokenAuth;

impl TokenAuth {
    /// Creates a new delegation middleware
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokenAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for TokenAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TokenAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Delegation middleware service
pub struct TokenAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for TokenAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            // Fail fast before the protected handler is ever reached
            let token = match extract_token(&req) {
                Some(token) => token,
                None => {
                    return Err(ErrorUnauthorized("Missing Authorization header"));
                }
            };

            let verifier = match req.app_data::<web::Data<Arc<dyn TokenVerifier>>>() {
                Some(verifier) => verifier,
                None => {
                    return Err(ErrorUnauthorized("Token verification not configured"));
                }
            };

            let user_id = match verifier.verify(&token).await {
                Ok(user_id) => user_id,
                Err(e) => {
                    log::debug!("token verification failed: {}", e);
                    return Err(ErrorUnauthorized("Unauthorized"));
                }
            };

            req.extensions_mut().insert(AuthContext { user_id, token });

            service.call(req).await
        })
    }
}

/// Extracts the token from the Authorization header
///
/// A `Bearer ` prefix is tolerated but not required; peers forward the
/// raw token value.
fn extract_token(req: &ServiceRequest) -> Option<String> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ").unwrap_or(header);

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_token_with_bearer_prefix() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer token_123"))
            .to_srv_request();

        assert_eq!(extract_token(&req), Some("token_123".to_string()));
    }

    #[test]
    fn test_extract_token_without_prefix() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "token_123"))
            .to_srv_request();

        assert_eq!(extract_token(&req), Some("token_123".to_string()));
    }

    #[test]
    fn test_extract_token_missing_header() {
        let req = TestRequest::default().to_srv_request();
        assert_eq!(extract_token(&req), None);
    }

    #[test]
    fn test_extract_token_empty_value() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, ""))
            .to_srv_request();

        assert_eq!(extract_token(&req), None);
    }
}
