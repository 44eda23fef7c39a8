//! Portfolio composition: orchestrates readers, normalization,
//! aggregation and ranking into one result object.

mod composition_model;
mod composition_service;

pub use composition_model::ComposedPortfolio;
pub use composition_service::{compose_portfolio, PortfolioComposer};
