//! Source readers - one per custodian export format.
//!
//! Each reader maps a raw tabular source (or raw CSV text for the US
//! brokerage export) into typed rows. Malformed individual rows are
//! dropped or zero-coerced, never fatal; a missing header row signals a
//! structural mismatch that callers degrade to an empty source.

mod mutual_fund_reader;
mod sheet;
mod stock_reader;
mod us_brokerage_reader;

pub use mutual_fund_reader::{read_mutual_funds, MutualFundRow};
pub use sheet::{parse_amount, Sheet};
pub use stock_reader::{read_stocks, StockRow, StockStatement, StockStatementTotals};
pub use us_brokerage_reader::{read_us_positions, UsPositionRow};
