//! Top-holding ranking entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A read-only projection of one ranked holding. Never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopHoldingEntry {
    pub name: String,
    pub owner: String,
    pub current: Decimal,
    pub pl: Decimal,
    pub pl_pct: Decimal,
    /// Classification, populated for mutual-fund holdings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Account tag, populated for US holdings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}
