//! Top-N holding rankings by current value.

mod top_holdings_model;
mod top_holdings_service;

pub use top_holdings_model::TopHoldingEntry;
pub use top_holdings_service::top_holdings;
