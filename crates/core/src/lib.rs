//! ValueBridge Core - portfolio aggregation across heterogeneous custodian exports.
//!
//! This crate normalizes mutual-fund, stock-holding and US brokerage exports
//! belonging to multiple owners into one canonical position model, converts
//! across currencies, and composes a layered financial summary. It performs
//! no I/O beyond reading the configured source files and retains no state
//! between compositions.

pub mod config;
pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod positions;
pub mod sources;

// Re-export common types from the position and portfolio modules
pub use portfolio::*;
pub use positions::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
