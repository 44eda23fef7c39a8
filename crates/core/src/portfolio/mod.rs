//! Portfolio-level services: aggregation, ranking and composition.

pub mod composition;
pub mod summary;
pub mod top_holdings;

pub use composition::{compose_portfolio, ComposedPortfolio, PortfolioComposer};
pub use summary::{
    AssetAllocation, IndiaUsdMetrics, OwnerAllocation, OwnerMetrics, PortfolioSummary,
    SummaryService,
};
pub use top_holdings::{top_holdings, TopHoldingEntry};
