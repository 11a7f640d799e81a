//! Dependency verification
//!
//! Before a service commits a write that references an entity owned by a
//! peer, it confirms the reference is currently available by reading it
//! from the owning service, with a bounded retry policy. Exhausting the
//! retries is a normal outcome ("precondition not currently satisfiable"),
//! not an error.

mod config;
mod probe;
mod verifier;

#[cfg(test)]
mod tests;

pub use config::RetryPolicy;
pub use probe::{EntityProbe, ProbeError};
pub use verifier::DependencyVerifier;
