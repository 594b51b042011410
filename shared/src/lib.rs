//! Shared types for the Pedido tool
//!
//! Domain models used by both the document crate and the desk application,
//! plus small utilities (timestamps, order ID generation).

pub mod models;
pub mod util;

// Re-exports
pub use models::{
    DeliveryKind, OrderRecord, OrderSummary, PaymentPlan, ProductLine, ResolvedAddress,
};
pub use serde::{Deserialize, Serialize};
