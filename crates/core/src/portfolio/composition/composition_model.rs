//! The composed result: flat position lists, the layered summary and the
//! top-holding rankings.

use serde::{Deserialize, Serialize};

use crate::portfolio::summary::PortfolioSummary;
use crate::portfolio::top_holdings::TopHoldingEntry;
use crate::positions::Position;

/// One composition over all configured sources. Built fresh per call and
/// discarded afterward; nothing is persisted or cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedPortfolio {
    pub mutual_funds: Vec<Position>,
    pub stocks: Vec<Position>,
    pub us_positions: Vec<Position>,
    pub summary: PortfolioSummary,
    /// Top mutual-fund holdings by current value, native INR.
    pub top_holdings: Vec<TopHoldingEntry>,
    /// Top US holdings by current value, USD.
    pub top_us_holdings: Vec<TopHoldingEntry>,
}
