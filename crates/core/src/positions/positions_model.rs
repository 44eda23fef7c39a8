//! Canonical position model shared by every source.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Asset class of a holding. Determines the native currency and which
/// breakdowns the position participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    MutualFund,
    Stock,
    UsEquity,
}

impl AssetClass {
    /// Native currency, fixed by asset class.
    pub fn currency(&self) -> Currency {
        match self {
            AssetClass::MutualFund | AssetClass::Stock => Currency::Inr,
            AssetClass::UsEquity => Currency::Usd,
        }
    }
}

/// Currency of a monetary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "INR")]
    Inr,
    #[serde(rename = "USD")]
    Usd,
}

/// Invested/current totals with derived P/L, the shape every aggregate
/// carries. The derivation lives in exactly one place so no asset class
/// or aggregation level can diverge in its P/L math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub invested: Decimal,
    pub current: Decimal,
    pub pl: Decimal,
    pub pl_pct: Decimal,
}

impl PerformanceMetrics {
    pub fn zero() -> Self {
        Self {
            invested: Decimal::ZERO,
            current: Decimal::ZERO,
            pl: Decimal::ZERO,
            pl_pct: Decimal::ZERO,
        }
    }

    /// Derives `pl` and `plPct` from invested/current amounts.
    /// `plPct` is zero when nothing is invested (never divides by zero).
    pub fn from_amounts(invested: Decimal, current: Decimal) -> Self {
        let pl = current - invested;
        let pl_pct = if invested.is_zero() {
            Decimal::ZERO
        } else {
            pl / invested * dec!(100)
        };
        Self {
            invested,
            current,
            pl,
            pl_pct,
        }
    }
}

impl Default for PerformanceMetrics {
    fn default() -> Self {
        Self::zero()
    }
}

/// One canonical holding record, normalized from any source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// The individual this holding belongs to.
    pub owner: String,
    pub asset_class: AssetClass,
    /// Scheme, stock or symbol name.
    pub instrument_id: String,
    pub isin: Option<String>,
    pub folio: Option<String>,
    /// Classification, mutual funds only.
    pub category: Option<String>,
    pub sub_category: Option<String>,
    /// Grouping tag, US positions only.
    pub account: Option<String>,
    pub quantity: Decimal,
    pub invested: Decimal,
    pub current: Decimal,
    pub pl: Decimal,
    pub pl_pct: Decimal,
    pub currency: Currency,
}

impl Position {
    /// The position's invested/current pair with derived P/L.
    pub fn metrics(&self) -> PerformanceMetrics {
        PerformanceMetrics::from_amounts(self.invested, self.current)
    }
}
