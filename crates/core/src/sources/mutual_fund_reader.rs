//! Reader for consolidated mutual-fund statements.
//!
//! The statement is a sheet with an arbitrary preamble; data rows start
//! immediately after the row containing the literal cell `"Scheme Name"`
//! and run to the end of the sheet.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MUTUAL_FUND_HEADER_LABEL;
use crate::sources::sheet::{parse_amount, Sheet};

/// One raw mutual-fund statement row, columns mapped by fixed position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutualFundRow {
    pub scheme: String,
    pub amc: String,
    pub category: String,
    pub sub_category: String,
    pub folio: String,
    pub source: String,
    pub units: Decimal,
    pub invested: Decimal,
    pub current: Decimal,
    pub returns: Decimal,
    /// Kept as raw statement text, e.g. "8%" or "-".
    pub xirr: String,
}

/// Extracts mutual-fund rows from a statement sheet.
///
/// Returns `None` when the header row is absent (a structural mismatch,
/// distinct from a statement that is present but holds no rows). Rows
/// whose first cell is empty are skipped; malformed numeric cells coerce
/// to zero.
pub fn read_mutual_funds(sheet: &Sheet) -> Option<Vec<MutualFundRow>> {
    let header_index = sheet.find_header_row(MUTUAL_FUND_HEADER_LABEL)?;

    let rows = sheet.rows[header_index + 1..]
        .iter()
        .filter(|row| !Sheet::cell(row, 0).is_empty())
        .map(|row| MutualFundRow {
            scheme: Sheet::cell(row, 0).to_string(),
            amc: Sheet::cell(row, 1).to_string(),
            category: Sheet::cell(row, 2).to_string(),
            sub_category: Sheet::cell(row, 3).to_string(),
            folio: Sheet::cell(row, 4).to_string(),
            source: Sheet::cell(row, 5).to_string(),
            units: parse_amount(Sheet::cell(row, 6)),
            invested: parse_amount(Sheet::cell(row, 7)),
            current: parse_amount(Sheet::cell(row, 8)),
            returns: parse_amount(Sheet::cell(row, 9)),
            xirr: Sheet::cell(row, 10).to_string(),
        })
        .collect();

    Some(rows)
}
