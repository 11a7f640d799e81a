//! Order creation orchestration

mod service;

pub use service::{NewOrder, OrderService};
