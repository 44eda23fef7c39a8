//! Layered summary models: per-owner, per-asset-class, per-category and
//! currency-zone aggregates plus the allocation views.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::positions::PerformanceMetrics;

/// One slice of an asset-class allocation view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub name: String,
    /// Current value in the view's currency.
    pub value: Decimal,
}

/// One slice of an owner allocation view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerAllocation {
    pub owner: String,
    /// Current value in the view's currency.
    pub value: Decimal,
}

/// Per-owner invested/current totals with derived P/L.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerMetrics {
    pub owner: String,
    #[serde(flatten)]
    pub metrics: PerformanceMetrics,
}

/// USD-normalized aggregate of the India-side holdings (mutual funds +
/// stocks), with the per-class breakdown the dashboard reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndiaUsdMetrics {
    #[serde(flatten)]
    pub metrics: PerformanceMetrics,
    pub mutual_invested: Decimal,
    pub mutual_current: Decimal,
    pub stocks_invested: Decimal,
    pub stocks_current: Decimal,
}

/// The full layered summary of one composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// INR per USD, as configured.
    pub fx_rate_inr_usd: Decimal,
    /// Mutual-fund totals, native INR.
    pub mutual: PerformanceMetrics,
    /// Stock totals, native INR.
    pub stocks: PerformanceMetrics,
    /// US totals, native USD.
    pub us: PerformanceMetrics,
    /// India-side totals converted to USD.
    pub india_usd: IndiaUsdMetrics,
    /// India-side USD totals plus US totals.
    pub global_usd: PerformanceMetrics,
    /// Mutual funds + stocks, native INR.
    pub combined: PerformanceMetrics,
    /// Per-owner native totals (mutual funds + stocks), merged across
    /// source files.
    pub by_owner: BTreeMap<String, PerformanceMetrics>,
    /// Mutual-fund current value by category.
    pub by_category: BTreeMap<String, Decimal>,
    /// Mutual-fund current value by sub-category.
    pub by_sub_category: BTreeMap<String, Decimal>,
    pub asset_allocation: Vec<AssetAllocation>,
    pub owner_allocation: Vec<OwnerAllocation>,
    pub asset_allocation_usd: Vec<AssetAllocation>,
    pub owner_allocation_usd: Vec<OwnerAllocation>,
    /// Per-owner US totals, native USD.
    pub us_by_owner: Vec<OwnerMetrics>,
}
