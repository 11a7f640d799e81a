//! Shared test harness for API integration tests

#![allow(dead_code)]

use actix_web::web;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use ch_api::routes::AppState;
use ch_core::domain::value_objects::EntityRef;
use ch_core::repositories::{
    MockNotificationRepository, MockOrderRepository, MockPaymentRepository, MockProductRepository,
    MockUserRepository,
};
use ch_core::services::dependency::{DependencyVerifier, EntityProbe, ProbeError, RetryPolicy};
use ch_core::services::orders::OrderService;
use ch_core::services::payments::PaymentService;
use ch_core::services::token::{LocalTokenVerifier, TokenConfig, TokenService, TokenVerifier};
use ch_infra::notify::LogNotificationSender;

pub type TestState = AppState<
    MockUserRepository,
    MockProductRepository,
    MockOrderRepository,
    MockPaymentRepository,
    MockNotificationRepository,
>;

/// Probe answering every read with one fixed status
pub struct FixedStatusProbe {
    pub status: u16,
    pub calls: AtomicU32,
}

impl FixedStatusProbe {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            calls: AtomicU32::new(0),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EntityProbe for FixedStatusProbe {
    async fn read_entity(
        &self,
        _entity: &EntityRef,
        _token: Option<&str>,
    ) -> Result<u16, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.status)
    }
}

/// Retry policy with short delays so failure paths stay fast in tests
pub fn fast_retry_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        attempt_timeout: Duration::from_secs(1),
        retry_delay: Duration::from_millis(10),
    }
}

/// Everything a test needs to drive the application
pub struct TestHarness {
    pub state: web::Data<TestState>,
    pub verifier: web::Data<Arc<dyn TokenVerifier>>,
    pub token_service: Arc<TokenService>,
    pub user_repository: Arc<MockUserRepository>,
    pub order_repository: Arc<MockOrderRepository>,
    pub payment_repository: Arc<MockPaymentRepository>,
}

impl TestHarness {
    /// Issue a token the app will accept
    pub fn issue_token(&self, subject: &str) -> String {
        self.token_service.issue(subject).unwrap()
    }
}

/// Build a harness whose dependency verifier reads through the given probe
pub fn harness_with_probe(probe: Arc<dyn EntityProbe>) -> TestHarness {
    let token_service = Arc::new(TokenService::new(TokenConfig {
        secret: "integration-test-secret".to_string(),
        token_expiry: 3600,
        issuer: "carthub".to_string(),
    }));

    let user_repository = Arc::new(MockUserRepository::new());
    let product_repository = Arc::new(MockProductRepository::new());
    let order_repository = Arc::new(MockOrderRepository::new());
    let payment_repository = Arc::new(MockPaymentRepository::new());
    let notification_repository = Arc::new(MockNotificationRepository::new());

    let order_service = Arc::new(OrderService::new(
        order_repository.clone(),
        DependencyVerifier::new(probe.clone(), fast_retry_policy()),
    ));
    let payment_service = Arc::new(PaymentService::new(
        payment_repository.clone(),
        DependencyVerifier::new(probe, fast_retry_policy()),
    ));

    let state = web::Data::new(AppState {
        token_service: token_service.clone(),
        user_repository: user_repository.clone(),
        product_repository,
        order_repository: order_repository.clone(),
        payment_repository: payment_repository.clone(),
        notification_repository,
        order_service,
        payment_service,
        notification_sender: Arc::new(LogNotificationSender::new()),
    });

    let verifier: Arc<dyn TokenVerifier> = Arc::new(LocalTokenVerifier::new(token_service.clone()));

    TestHarness {
        state,
        verifier: web::Data::new(verifier),
        token_service,
        user_repository,
        order_repository,
        payment_repository,
    }
}

/// Build a harness whose probe always reports the dependency available
pub fn harness() -> (TestHarness, Arc<FixedStatusProbe>) {
    let probe = Arc::new(FixedStatusProbe::new(200));
    let h = harness_with_probe(probe.clone());
    (h, probe)
}
