//! Composition configuration: the FX rate and the set of source files.
//!
//! The FX rate is threaded explicitly from here into the aggregation
//! services; nothing deeper in the fold logic reads configuration.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FX_RATE_INR_USD;
use crate::errors::{Error, Result};

/// One tabular export and the owner its rows belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFile {
    pub path: PathBuf,
    pub owner: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, owner: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            owner: owner.into(),
        }
    }
}

/// Everything a composition run needs: one FX rate and the (file, owner)
/// pairs per source type. Deserializable so an embedding server can load
/// it from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioConfig {
    /// Native-currency units (INR) per one USD.
    #[serde(default = "default_fx_rate")]
    pub fx_rate_inr_usd: Decimal,
    #[serde(default)]
    pub mutual_fund_files: Vec<SourceFile>,
    #[serde(default)]
    pub stock_files: Vec<SourceFile>,
    #[serde(default)]
    pub us_brokerage_files: Vec<SourceFile>,
}

fn default_fx_rate() -> Decimal {
    DEFAULT_FX_RATE_INR_USD
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            fx_rate_inr_usd: DEFAULT_FX_RATE_INR_USD,
            mutual_fund_files: Vec::new(),
            stock_files: Vec::new(),
            us_brokerage_files: Vec::new(),
        }
    }
}

impl PortfolioConfig {
    /// Parses a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PortfolioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration. The FX rate divides native totals, so
    /// a zero or negative rate is rejected up front.
    pub fn validate(&self) -> Result<()> {
        if self.fx_rate_inr_usd <= Decimal::ZERO {
            return Err(Error::InvalidConfigValue(format!(
                "fxRateInrUsd must be positive, got {}",
                self.fx_rate_inr_usd
            )));
        }
        Ok(())
    }
}
