//! Entity probe seam
//!
//! The verifier only needs the HTTP status a peer returned for a read of
//! the referenced entity. The reqwest-backed implementation lives in the
//! infrastructure crate; tests use scripted probes.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::value_objects::EntityRef;

/// Transport-level probe failures
///
/// The verifier treats every variant the same as a non-200 status; the
/// distinction only matters for logging.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("connection failed: {message}")]
    Connection { message: String },

    #[error("request could not be built: {message}")]
    Request { message: String },
}

/// Reads a foreign entity from its owning service
#[async_trait]
pub trait EntityProbe: Send + Sync {
    /// Issue a read for the referenced entity, forwarding the caller's
    /// token when present, and return the response status code.
    ///
    /// The response body is deliberately never surfaced: availability is
    /// judged on status alone.
    async fn read_entity(
        &self,
        entity: &EntityRef,
        token: Option<&str>,
    ) -> Result<u16, ProbeError>;
}
