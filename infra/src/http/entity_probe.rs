//! HTTP implementation of the entity probe

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use std::time::Duration;
use tracing::debug;

use ch_core::domain::value_objects::{EntityKind, EntityRef};
use ch_core::services::dependency::{EntityProbe, ProbeError};
use ch_shared::config::PeerServicesConfig;

use crate::InfrastructureError;

/// Probe reading foreign entities from their owning service over HTTP
///
/// The client carries the per-attempt timeout; the verifier additionally
/// bounds each attempt, so a hung connection can never outlive its slot.
pub struct HttpEntityProbe {
    client: reqwest::Client,
    peers: PeerServicesConfig,
}

impl HttpEntityProbe {
    /// Create a new probe for the configured peers
    pub fn new(
        peers: PeerServicesConfig,
        attempt_timeout: Duration,
    ) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(attempt_timeout)
            .build()
            .map_err(|e| InfrastructureError::Http(format!("Failed to build client: {}", e)))?;

        Ok(Self { client, peers })
    }

    fn base_url(&self, kind: EntityKind) -> &str {
        match kind {
            EntityKind::Product => &self.peers.product_service_url,
            EntityKind::Order => &self.peers.order_service_url,
        }
    }
}

#[async_trait]
impl EntityProbe for HttpEntityProbe {
    async fn read_entity(
        &self,
        entity: &EntityRef,
        token: Option<&str>,
    ) -> Result<u16, ProbeError> {
        let url = format!(
            "{}/api/v1/{}/{}",
            self.base_url(entity.kind).trim_end_matches('/'),
            entity.kind.collection(),
            entity.id
        );

        let mut request = self.client.get(&url);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, token);
        }

        let response = request.send().await.map_err(|e| ProbeError::Connection {
            message: e.to_string(),
        })?;

        let status = response.status().as_u16();
        debug!(%entity, status, "peer entity read");

        // Availability is judged on status alone; the body is dropped
        Ok(status)
    }
}
