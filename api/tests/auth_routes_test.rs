//! Integration tests for the auth endpoints

mod common;

use actix_web::http::StatusCode;
use actix_web::test;

use ch_api::app::create_app;
use ch_api::dto::auth::{LoginResponse, VerifyTokenResponse};

use common::harness;

#[actix_rt::test]
async fn test_login_issues_verifiable_token() {
    let (h, _) = harness();
    let app = test::init_service(create_app(h.state.clone(), h.verifier.clone())).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({ "user_id": "user-9", "password": "secret" }))
        .to_request();
    let login: LoginResponse = test::call_and_read_body_json(&app, request).await;

    assert!(!login.token.is_empty());
    assert_eq!(login.expires_in, 3600);

    // The wire contract: {"token"} in, {"user_id"} out with status 200
    let request = test::TestRequest::post()
        .uri("/api/v1/auth/verify-token")
        .set_json(serde_json::json!({ "token": login.token }))
        .to_request();
    let verified: VerifyTokenResponse = test::call_and_read_body_json(&app, request).await;

    assert_eq!(verified.user_id, "user-9");
}

#[actix_rt::test]
async fn test_verify_token_rejects_garbage() {
    let (h, _) = harness();
    let app = test::init_service(create_app(h.state.clone(), h.verifier.clone())).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/auth/verify-token")
        .set_json(serde_json::json!({ "token": "garbage" }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_login_rejects_empty_user_id() {
    let (h, _) = harness();
    let app = test::init_service(create_app(h.state.clone(), h.verifier.clone())).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({ "user_id": "", "password": "secret" }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_health_endpoint_is_public() {
    let (h, _) = harness();
    let app = test::init_service(create_app(h.state.clone(), h.verifier.clone())).await;

    let request = test::TestRequest::get().uri("/health").to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
}
