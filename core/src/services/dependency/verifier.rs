//! Bounded-retry dependency verification

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::value_objects::EntityRef;

use super::config::RetryPolicy;
use super::probe::EntityProbe;

/// Confirms that a foreign entity reference is currently available
///
/// One instance per service process; every verification call carries its
/// own attempt state, so concurrent requests never interact.
pub struct DependencyVerifier {
    probe: Arc<dyn EntityProbe>,
    policy: RetryPolicy,
}

impl DependencyVerifier {
    /// Creates a new verifier over the given probe and retry policy
    pub fn new(probe: Arc<dyn EntityProbe>, policy: RetryPolicy) -> Self {
        Self { probe, policy }
    }

    /// Checks whether the referenced entity is available at its owner
    ///
    /// Succeeds on the first attempt that returns status 200 exactly.
    /// A timed-out attempt, a connection failure, and a non-200 response
    /// all count the same against the attempt budget. Returns `false`
    /// once the budget is exhausted.
    pub async fn check_available(&self, entity: &EntityRef, token: Option<&str>) -> bool {
        for attempt in 1..=self.policy.max_attempts {
            let read = self.probe.read_entity(entity, token);

            match tokio::time::timeout(self.policy.attempt_timeout, read).await {
                Ok(Ok(200)) => {
                    debug!(%entity, attempt, "dependency available");
                    return true;
                }
                Ok(Ok(status)) => {
                    warn!(
                        %entity, attempt, status,
                        "dependency read returned non-OK status"
                    );
                }
                Ok(Err(e)) => {
                    warn!(%entity, attempt, error = %e, "dependency read failed");
                }
                Err(_) => {
                    warn!(
                        %entity, attempt,
                        timeout_secs = self.policy.attempt_timeout.as_secs(),
                        "dependency read timed out"
                    );
                }
            }

            if attempt < self.policy.max_attempts {
                tokio::time::sleep(self.policy.retry_delay).await;
            }
        }

        warn!(
            %entity,
            attempts = self.policy.max_attempts,
            "dependency unavailable after exhausting retries"
        );
        false
    }
}
