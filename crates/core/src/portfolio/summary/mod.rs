//! Layered aggregation: owner, asset-class, category and currency-zone
//! summaries over normalized positions.

mod summary_model;
mod summary_service;

pub use summary_model::*;
pub use summary_service::SummaryService;

#[cfg(test)]
mod summary_service_tests;
