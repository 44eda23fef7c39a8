//! Service folding normalized positions into the layered summary.
//!
//! Every total is a pure fold over `(invested, current)` pairs; derived
//! P/L metrics are computed once at the end of each fold, so no output
//! depends on the input order of positions.

use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;

use crate::constants::{
    MUTUAL_FUNDS_ALLOCATION_NAME, STOCKS_ALLOCATION_NAME, US_HOLDINGS_ALLOCATION_NAME,
};
use crate::errors::{Error, Result};
use crate::positions::{PerformanceMetrics, Position};

use super::summary_model::{
    AssetAllocation, IndiaUsdMetrics, OwnerAllocation, OwnerMetrics, PortfolioSummary,
};

/// Computes layered aggregates over normalized positions.
pub struct SummaryService {
    fx_rate_inr_usd: Decimal,
}

impl SummaryService {
    /// Creates the service with the configured FX rate (INR per USD).
    /// The rate divides native totals, so non-positive rates are rejected.
    pub fn new(fx_rate_inr_usd: Decimal) -> Result<Self> {
        if fx_rate_inr_usd <= Decimal::ZERO {
            return Err(Error::InvalidConfigValue(format!(
                "FX rate must be positive, got {}",
                fx_rate_inr_usd
            )));
        }
        Ok(Self { fx_rate_inr_usd })
    }

    /// Folds the full set of positions into the layered summary.
    pub fn summarize(
        &self,
        mutual_funds: &[Position],
        stocks: &[Position],
        us_positions: &[Position],
    ) -> PortfolioSummary {
        debug!(
            "summarizing {} mutual funds, {} stocks, {} US positions",
            mutual_funds.len(),
            stocks.len(),
            us_positions.len()
        );

        let mutual = totals(mutual_funds);
        let stock_totals = totals(stocks);
        let us = totals(us_positions);

        let combined = PerformanceMetrics::from_amounts(
            mutual.invested + stock_totals.invested,
            mutual.current + stock_totals.current,
        );

        // Convert invested and current separately, then derive P/L
        // post-conversion. Converting a pre-computed P/L would reorder
        // the rounding.
        let rate = self.fx_rate_inr_usd;
        let mutual_invested_usd = mutual.invested / rate;
        let mutual_current_usd = mutual.current / rate;
        let stocks_invested_usd = stock_totals.invested / rate;
        let stocks_current_usd = stock_totals.current / rate;
        let india_metrics = PerformanceMetrics::from_amounts(
            mutual_invested_usd + stocks_invested_usd,
            mutual_current_usd + stocks_current_usd,
        );
        let global_usd = PerformanceMetrics::from_amounts(
            india_metrics.invested + us.invested,
            india_metrics.current + us.current,
        );

        let by_owner = owner_totals(mutual_funds.iter().chain(stocks));
        let us_by_owner_map = owner_totals(us_positions.iter());

        let by_category = category_totals(mutual_funds, |p| p.category.as_deref());
        let by_sub_category = category_totals(mutual_funds, |p| p.sub_category.as_deref());

        let asset_allocation = vec![
            AssetAllocation {
                name: MUTUAL_FUNDS_ALLOCATION_NAME.to_string(),
                value: mutual.current,
            },
            AssetAllocation {
                name: STOCKS_ALLOCATION_NAME.to_string(),
                value: stock_totals.current,
            },
        ];
        let asset_allocation_usd = vec![
            AssetAllocation {
                name: MUTUAL_FUNDS_ALLOCATION_NAME.to_string(),
                value: mutual_current_usd,
            },
            AssetAllocation {
                name: STOCKS_ALLOCATION_NAME.to_string(),
                value: stocks_current_usd,
            },
            AssetAllocation {
                name: US_HOLDINGS_ALLOCATION_NAME.to_string(),
                value: us.current,
            },
        ];

        let owner_allocation: Vec<OwnerAllocation> = by_owner
            .iter()
            .map(|(owner, metrics)| OwnerAllocation {
                owner: owner.clone(),
                value: metrics.current,
            })
            .collect();

        // USD owner view: native current converted, plus US current,
        // over the union of owners from both sides.
        let mut owner_usd: BTreeMap<String, Decimal> = BTreeMap::new();
        for (owner, metrics) in &by_owner {
            *owner_usd.entry(owner.clone()).or_default() += metrics.current / rate;
        }
        for (owner, metrics) in &us_by_owner_map {
            *owner_usd.entry(owner.clone()).or_default() += metrics.current;
        }
        let owner_allocation_usd: Vec<OwnerAllocation> = owner_usd
            .into_iter()
            .map(|(owner, value)| OwnerAllocation { owner, value })
            .collect();

        let us_by_owner: Vec<OwnerMetrics> = us_by_owner_map
            .into_iter()
            .map(|(owner, metrics)| OwnerMetrics { owner, metrics })
            .collect();

        PortfolioSummary {
            fx_rate_inr_usd: rate,
            mutual,
            stocks: stock_totals,
            us,
            india_usd: IndiaUsdMetrics {
                metrics: india_metrics,
                mutual_invested: mutual_invested_usd,
                mutual_current: mutual_current_usd,
                stocks_invested: stocks_invested_usd,
                stocks_current: stocks_current_usd,
            },
            global_usd,
            combined,
            by_owner,
            by_category,
            by_sub_category,
            asset_allocation,
            owner_allocation,
            asset_allocation_usd,
            owner_allocation_usd,
            us_by_owner,
        }
    }
}

/// Sums invested/current over positions, deriving metrics once at the end.
fn totals(positions: &[Position]) -> PerformanceMetrics {
    let (invested, current) = positions.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(invested, current), position| (invested + position.invested, current + position.current),
    );
    PerformanceMetrics::from_amounts(invested, current)
}

/// Sums invested/current per owner. Owners repeated across source files
/// merge into one entry.
fn owner_totals<'a>(
    positions: impl Iterator<Item = &'a Position>,
) -> BTreeMap<String, PerformanceMetrics> {
    let amounts = positions.fold(
        BTreeMap::<String, (Decimal, Decimal)>::new(),
        |mut acc, position| {
            let entry = acc.entry(position.owner.clone()).or_default();
            entry.0 += position.invested;
            entry.1 += position.current;
            acc
        },
    );
    amounts
        .into_iter()
        .map(|(owner, (invested, current))| {
            (owner, PerformanceMetrics::from_amounts(invested, current))
        })
        .collect()
}

/// Sums current value grouped by a classification key. Positions without
/// the key do not participate.
fn category_totals<'a>(
    positions: &'a [Position],
    key: impl Fn(&'a Position) -> Option<&'a str>,
) -> BTreeMap<String, Decimal> {
    positions.iter().fold(BTreeMap::new(), |mut acc, position| {
        if let Some(name) = key(position) {
            *acc.entry(name.to_string()).or_default() += position.current;
        }
        acc
    })
}
