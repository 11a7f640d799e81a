//! Unit tests for the dependency verifier retry discipline
//!
//! All tests run on a paused tokio clock, so the retry delays and
//! per-attempt timeouts elapse virtually and assertions on timing are
//! exact rather than wall-clock dependent.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::domain::value_objects::EntityRef;
use crate::services::dependency::{DependencyVerifier, EntityProbe, ProbeError, RetryPolicy};

/// Probe that replays a scripted sequence of outcomes
struct ScriptedProbe {
    responses: Mutex<VecDeque<Result<u16, ProbeError>>>,
    calls: AtomicU32,
}

impl ScriptedProbe {
    fn new(responses: Vec<Result<u16, ProbeError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicU32::new(0),
        }
    }

    fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EntityProbe for ScriptedProbe {
    async fn read_entity(
        &self,
        _entity: &EntityRef,
        _token: Option<&str>,
    ) -> Result<u16, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses.lock().await.pop_front().unwrap_or(Ok(500))
    }
}

/// Probe that never completes, forcing the per-attempt timeout
struct HangingProbe {
    calls: AtomicU32,
}

impl HangingProbe {
    fn new() -> Self {
        Self {
            calls: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl EntityProbe for HangingProbe {
    async fn read_entity(
        &self,
        _entity: &EntityRef,
        _token: Option<&str>,
    ) -> Result<u16, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending().await
    }
}

fn verifier_with(probe: Arc<dyn EntityProbe>) -> DependencyVerifier {
    DependencyVerifier::new(probe, RetryPolicy::default())
}

#[tokio::test(start_paused = true)]
async fn test_exhausts_three_attempts_against_persistent_failure() {
    let probe = Arc::new(ScriptedProbe::new(vec![Ok(404), Ok(404), Ok(404)]));
    let verifier = verifier_with(probe.clone());

    let started = tokio::time::Instant::now();
    let available = verifier
        .check_available(&EntityRef::product("p-404"), None)
        .await;
    let elapsed = started.elapsed();

    assert!(!available);
    assert_eq!(probe.call_count(), 3);
    // Two inter-attempt delays of 2s; no delay after the final attempt
    assert!(elapsed >= Duration::from_secs(4));
    assert!(elapsed <= Duration::from_secs(21));
}

#[tokio::test(start_paused = true)]
async fn test_succeeds_on_second_attempt_after_one_failure() {
    let probe = Arc::new(ScriptedProbe::new(vec![Ok(503), Ok(200)]));
    let verifier = verifier_with(probe.clone());

    let available = verifier
        .check_available(&EntityRef::product("p-1"), None)
        .await;

    assert!(available);
    assert_eq!(probe.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_first_attempt_success_skips_delays() {
    let probe = Arc::new(ScriptedProbe::new(vec![Ok(200)]));
    let verifier = verifier_with(probe.clone());

    let started = tokio::time::Instant::now();
    let available = verifier
        .check_available(&EntityRef::order("o-1"), Some("token"))
        .await;
    let elapsed = started.elapsed();

    assert!(available);
    assert_eq!(probe.call_count(), 1);
    assert!(elapsed < Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn test_non_200_success_statuses_do_not_count_as_available() {
    // 204 and 301 are "successful" HTTP responses but not the exact 200
    // the availability contract requires
    let probe = Arc::new(ScriptedProbe::new(vec![Ok(204), Ok(301), Ok(202)]));
    let verifier = verifier_with(probe.clone());

    let available = verifier
        .check_available(&EntityRef::product("p-2"), None)
        .await;

    assert!(!available);
    assert_eq!(probe.call_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_hung_peer_times_out_every_attempt() {
    let probe = Arc::new(HangingProbe::new());
    let verifier = verifier_with(probe.clone());

    let started = tokio::time::Instant::now();
    let available = verifier
        .check_available(&EntityRef::product("p-slow"), None)
        .await;
    let elapsed = started.elapsed();

    assert!(!available);
    assert_eq!(probe.calls.load(Ordering::SeqCst), 3);
    // Three 5s timeouts plus two 2s delays
    assert!(elapsed >= Duration::from_secs(19));
}

#[tokio::test(start_paused = true)]
async fn test_connection_failure_then_success() {
    let probe = Arc::new(ScriptedProbe::new(vec![
        Err(ProbeError::Connection {
            message: "connection refused".to_string(),
        }),
        Ok(200),
    ]));
    let verifier = verifier_with(probe.clone());

    let available = verifier
        .check_available(&EntityRef::order("o-2"), Some("token"))
        .await;

    assert!(available);
    assert_eq!(probe.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_custom_policy_attempt_budget() {
    let probe = Arc::new(ScriptedProbe::new((0..5).map(|_| Ok(500)).collect()));
    let verifier = DependencyVerifier::new(
        probe.clone(),
        RetryPolicy {
            max_attempts: 5,
            attempt_timeout: Duration::from_secs(1),
            retry_delay: Duration::from_millis(100),
        },
    );

    let available = verifier
        .check_available(&EntityRef::product("p-3"), None)
        .await;

    assert!(!available);
    assert_eq!(probe.call_count(), 5);
}
