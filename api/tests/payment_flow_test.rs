//! End-to-end payment creation scenarios

mod common;

use actix_web::http::header::AUTHORIZATION;
use actix_web::http::StatusCode;
use actix_web::test;
use std::sync::Arc;

use ch_api::app::create_app;
use ch_core::repositories::PaymentRepository;

use common::{harness_with_probe, FixedStatusProbe};

#[actix_rt::test]
async fn test_payment_rejected_when_order_does_not_exist() {
    let probe = Arc::new(FixedStatusProbe::new(404));
    let h = harness_with_probe(probe.clone());
    let token = h.issue_token("user-1");

    let app = test::init_service(create_app(h.state.clone(), h.verifier.clone())).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/payments")
        .insert_header((AUTHORIZATION, token))
        .set_json(serde_json::json!({ "order_id": "o-missing", "amount": 19.99 }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(probe.call_count(), 3);
    assert_eq!(h.payment_repository.count().await, 0);
}

#[actix_rt::test]
async fn test_payment_created_when_order_exists() {
    let probe = Arc::new(FixedStatusProbe::new(200));
    let h = harness_with_probe(probe.clone());
    let token = h.issue_token("user-1");

    let app = test::init_service(create_app(h.state.clone(), h.verifier.clone())).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/payments")
        .insert_header((AUTHORIZATION, token))
        .set_json(serde_json::json!({ "order_id": "o-1", "amount": 19.99 }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(h.payment_repository.count().await, 1);

    let payments = h.payment_repository.find_all().await.unwrap();
    assert_eq!(payments[0].order_id, "o-1");
}

#[actix_rt::test]
async fn test_payment_requires_authentication() {
    let probe = Arc::new(FixedStatusProbe::new(200));
    let h = harness_with_probe(probe.clone());

    let app = test::init_service(create_app(h.state.clone(), h.verifier.clone())).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/payments")
        .set_json(serde_json::json!({ "order_id": "o-1", "amount": 19.99 }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(h.payment_repository.count().await, 0);
}
