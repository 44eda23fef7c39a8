//! Orchestration of one composition run: read every configured source
//! fresh, normalize, aggregate, rank and assemble.
//!
//! Reads are the only I/O. Unreadable files and header-less sheets
//! degrade to empty sources with a warning; the composition itself never
//! fails for data-quality reasons.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::config::{PortfolioConfig, SourceFile};
use crate::constants::TOP_HOLDINGS_LIMIT;
use crate::errors::Result;
use crate::portfolio::summary::SummaryService;
use crate::portfolio::top_holdings::top_holdings;
use crate::positions::{from_mutual_fund, from_stock, from_us_position};
use crate::sources::{read_mutual_funds, read_stocks, read_us_positions, Sheet};

use super::composition_model::ComposedPortfolio;

/// Composes the full portfolio from the configured source files.
///
/// Stateless between calls: every `compose` re-reads all sources and
/// recomputes everything, so concurrent compositions are safe.
pub struct PortfolioComposer {
    config: PortfolioConfig,
    summary_service: SummaryService,
}

impl PortfolioComposer {
    /// Builds a composer from a validated configuration.
    pub fn new(config: PortfolioConfig) -> Result<Self> {
        config.validate()?;
        let summary_service = SummaryService::new(config.fx_rate_inr_usd)?;
        Ok(Self {
            config,
            summary_service,
        })
    }

    /// Runs one composition over all configured sources.
    pub fn compose(&self) -> Result<ComposedPortfolio> {
        let mut mutual_funds = Vec::new();
        for source in &self.config.mutual_fund_files {
            if let Some(sheet) = load_sheet(source) {
                match read_mutual_funds(&sheet) {
                    Some(rows) => {
                        debug!(
                            "read {} mutual fund rows for {} from {}",
                            rows.len(),
                            source.owner,
                            source.path.display()
                        );
                        mutual_funds
                            .extend(rows.iter().map(|row| from_mutual_fund(&source.owner, row)));
                    }
                    None => warn_header_not_found(&source.path, "Scheme Name"),
                }
            }
        }

        let mut stocks = Vec::new();
        for source in &self.config.stock_files {
            if let Some(sheet) = load_sheet(source) {
                match read_stocks(&sheet) {
                    Some(statement) => {
                        debug!(
                            "read {} stock rows for {} from {} (statement totals: invested {}, current {})",
                            statement.rows.len(),
                            source.owner,
                            source.path.display(),
                            statement.totals.invested,
                            statement.totals.current
                        );
                        stocks.extend(
                            statement
                                .rows
                                .iter()
                                .map(|row| from_stock(&source.owner, row)),
                        );
                    }
                    None => warn_header_not_found(&source.path, "Stock Name"),
                }
            }
        }

        let mut us_positions = Vec::new();
        for source in &self.config.us_brokerage_files {
            if let Some(text) = load_text(source) {
                let rows = read_us_positions(&text);
                debug!(
                    "read {} US positions for {} from {}",
                    rows.len(),
                    source.owner,
                    source.path.display()
                );
                us_positions.extend(rows.iter().map(|row| from_us_position(&source.owner, row)));
            }
        }

        let summary = self
            .summary_service
            .summarize(&mutual_funds, &stocks, &us_positions);
        let top = top_holdings(&mutual_funds, TOP_HOLDINGS_LIMIT);
        let top_us = top_holdings(&us_positions, TOP_HOLDINGS_LIMIT);

        Ok(ComposedPortfolio {
            mutual_funds,
            stocks,
            us_positions,
            summary,
            top_holdings: top,
            top_us_holdings: top_us,
        })
    }
}

/// Convenience: build a composer and run a single composition.
pub fn compose_portfolio(config: PortfolioConfig) -> Result<ComposedPortfolio> {
    PortfolioComposer::new(config)?.compose()
}

/// Loads a sheet-shaped source, degrading to `None` with a warning when
/// the file is missing or unreadable.
fn load_sheet(source: &SourceFile) -> Option<Sheet> {
    let bytes = match fs::read(&source.path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn_unreadable(&source.path, &e.to_string());
            return None;
        }
    };
    match Sheet::from_csv_bytes(&bytes) {
        Ok(sheet) => Some(sheet),
        Err(e) => {
            warn_unreadable(&source.path, &e.to_string());
            None
        }
    }
}

/// Loads a raw-text source, degrading to `None` with a warning.
fn load_text(source: &SourceFile) -> Option<String> {
    match fs::read(&source.path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            warn_unreadable(&source.path, &e.to_string());
            None
        }
    }
}

fn warn_unreadable(path: &Path, detail: &str) {
    warn!(
        "source {} unavailable, using empty position list: {}",
        path.display(),
        detail
    );
}

fn warn_header_not_found(path: &Path, label: &str) {
    warn!(
        "source {} has no '{}' header row, using empty position list",
        path.display(),
        label
    );
}
