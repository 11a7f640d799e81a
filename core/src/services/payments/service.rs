//! Payment service composing dependency verification and persistence

use std::sync::Arc;
use tracing::info;

use crate::domain::entities::payment::Payment;
use crate::domain::value_objects::EntityRef;
use crate::errors::DomainError;
use crate::repositories::PaymentRepository;
use crate::services::dependency::DependencyVerifier;

/// Input for a payment creation request
#[derive(Debug, Clone)]
pub struct NewPayment {
    /// Foreign reference to the order being paid
    pub order_id: String,
    pub amount: f64,
}

/// Orchestrates payment creation
///
/// The order reference is verified against the order service with the
/// same retry policy orders apply to products; a missing order rejects
/// the write before anything touches storage.
pub struct PaymentService<R: PaymentRepository> {
    repository: Arc<R>,
    verifier: DependencyVerifier,
}

impl<R: PaymentRepository> PaymentService<R> {
    /// Creates a new payment service
    pub fn new(repository: Arc<R>, verifier: DependencyVerifier) -> Self {
        Self {
            repository,
            verifier,
        }
    }

    /// Creates a payment after confirming the order exists
    ///
    /// # Returns
    ///
    /// * `Ok(Payment)` - The persisted payment
    /// * `Err(DomainError::PreconditionFailed)` - Order not found after retries
    /// * `Err(DomainError)` - Storage failure
    pub async fn create_payment(
        &self,
        new_payment: NewPayment,
        token: Option<&str>,
    ) -> Result<Payment, DomainError> {
        let order_ref = EntityRef::order(new_payment.order_id.clone());

        if !self.verifier.check_available(&order_ref, token).await {
            return Err(DomainError::PreconditionFailed {
                resource: format!("order {}", new_payment.order_id),
            });
        }

        let payment = Payment::new(new_payment.order_id, new_payment.amount);
        let payment = self.repository.create(payment).await?;

        info!(payment_id = %payment.id, order_id = %payment.order_id, "payment created");
        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::sync::Mutex;

    use crate::repositories::MockPaymentRepository;
    use crate::services::dependency::{EntityProbe, ProbeError, RetryPolicy};

    /// Probe replaying a scripted status sequence
    struct SequenceProbe {
        statuses: Mutex<VecDeque<u16>>,
        calls: AtomicU32,
    }

    impl SequenceProbe {
        fn new(statuses: Vec<u16>) -> Self {
            Self {
                statuses: Mutex::new(statuses.into()),
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl EntityProbe for SequenceProbe {
        async fn read_entity(
            &self,
            _entity: &EntityRef,
            _token: Option<&str>,
        ) -> Result<u16, ProbeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.statuses.lock().await.pop_front().unwrap_or(500))
        }
    }

    fn service_with_probe(
        repository: Arc<MockPaymentRepository>,
        probe: Arc<SequenceProbe>,
    ) -> PaymentService<MockPaymentRepository> {
        PaymentService::new(
            repository,
            DependencyVerifier::new(probe, RetryPolicy::default()),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_order_rejects_without_persisting() {
        let repository = Arc::new(MockPaymentRepository::new());
        let probe = Arc::new(SequenceProbe::new(vec![404, 404, 404]));
        let service = service_with_probe(repository.clone(), probe.clone());

        let result = service
            .create_payment(
                NewPayment {
                    order_id: "o-missing".to_string(),
                    amount: 25.0,
                },
                Some("token"),
            )
            .await;

        assert!(matches!(
            result,
            Err(DomainError::PreconditionFailed { .. })
        ));
        assert_eq!(probe.calls.load(Ordering::SeqCst), 3);
        assert_eq!(repository.count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_order_found_on_retry_persists_payment() {
        let repository = Arc::new(MockPaymentRepository::new());
        let probe = Arc::new(SequenceProbe::new(vec![503, 200]));
        let service = service_with_probe(repository.clone(), probe.clone());

        let payment = service
            .create_payment(
                NewPayment {
                    order_id: "o-1".to_string(),
                    amount: 25.0,
                },
                Some("token"),
            )
            .await
            .unwrap();

        assert_eq!(payment.order_id, "o-1");
        assert_eq!(probe.calls.load(Ordering::SeqCst), 2);
        assert_eq!(repository.count().await, 1);
    }
}
