//! Integration tests for the delegation middleware

mod common;

use actix_web::http::header::AUTHORIZATION;
use actix_web::http::StatusCode;
use actix_web::{test, web, App, HttpResponse};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use ch_api::middleware::auth::{AuthContext, TokenAuth};
use ch_core::services::token::TokenVerifier;

use common::harness;

async fn ok() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[actix_rt::test]
async fn test_missing_header_rejects_before_handler_runs() {
    let (h, _) = harness();
    let hits = Arc::new(AtomicU32::new(0));
    let handler_hits = hits.clone();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(h.verifier.get_ref().clone()))
            .service(
                web::scope("/protected").wrap(TokenAuth::new()).route(
                    "",
                    web::get().to(move || {
                        let hits = handler_hits.clone();
                        async move {
                            hits.fetch_add(1, Ordering::SeqCst);
                            HttpResponse::Ok().finish()
                        }
                    }),
                ),
            ),
    )
    .await;

    let request = test::TestRequest::get().uri("/protected").to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[actix_rt::test]
async fn test_invalid_token_is_unauthorized() {
    let (h, _) = harness();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(h.verifier.get_ref().clone()))
            .service(
                web::scope("/protected")
                    .wrap(TokenAuth::new())
                    .route("", web::get().to(ok)),
            ),
    )
    .await;

    let request = test::TestRequest::get()
        .uri("/protected")
        .insert_header((AUTHORIZATION, "not-a-real-token"))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_valid_token_injects_auth_context() {
    let (h, _) = harness();
    let token = h.issue_token("user-42");

    async fn whoami(auth: AuthContext) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({ "user_id": auth.user_id }))
    }

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(h.verifier.get_ref().clone()))
            .service(
                web::scope("/protected")
                    .wrap(TokenAuth::new())
                    .route("", web::get().to(whoami)),
            ),
    )
    .await;

    let request = test::TestRequest::get()
        .uri("/protected")
        .insert_header((AUTHORIZATION, token.clone()))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["user_id"], "user-42");

    // The Bearer prefix form is accepted too
    let request = test::TestRequest::get()
        .uri("/protected")
        .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["user_id"], "user-42");
}

#[actix_rt::test]
async fn test_token_signed_elsewhere_is_unauthorized() {
    let (h, _) = harness();

    let other_service = Arc::new(ch_core::services::token::TokenService::new(
        ch_core::services::token::TokenConfig {
            secret: "a-different-secret".to_string(),
            token_expiry: 3600,
            issuer: "carthub".to_string(),
        },
    ));
    let foreign_token = other_service.issue("user-42").unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(h.verifier.get_ref().clone()))
            .service(
                web::scope("/protected")
                    .wrap(TokenAuth::new())
                    .route("", web::get().to(ok)),
            ),
    )
    .await;

    let request = test::TestRequest::get()
        .uri("/protected")
        .insert_header((AUTHORIZATION, foreign_token))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_verifier_resolves_issued_tokens() {
    let (h, _) = harness();
    let verifier: &Arc<dyn TokenVerifier> = h.verifier.get_ref();
    let token = h.issue_token("user-1");
    assert_eq!(verifier.verify(&token).await.unwrap(), "user-1");
}
