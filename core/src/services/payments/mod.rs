//! Payment creation orchestration

mod service;

pub use service::{NewPayment, PaymentService};
