//! Reader for brokerage stock-holding statements.
//!
//! Same header-search strategy as the mutual-fund reader, keyed on the
//! literal cell `"Stock Name"`. Alongside the rows, the reader sums its
//! own invested/current totals; those are display-only — the aggregator
//! recomputes canonical sums from normalized positions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::STOCK_HEADER_LABEL;
use crate::sources::sheet::{parse_amount, Sheet};

/// One raw stock-holding row, columns mapped by fixed position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRow {
    pub stock: String,
    pub isin: String,
    pub quantity: Decimal,
    pub avg_buy_price: Decimal,
    pub buy_value: Decimal,
    pub closing_price: Decimal,
    pub closing_value: Decimal,
    pub unrealised_pl: Decimal,
}

/// Per-statement totals summed over the statement's own rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockStatementTotals {
    pub invested: Decimal,
    pub current: Decimal,
    pub pl: Decimal,
}

/// A parsed stock statement: its rows plus display totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockStatement {
    pub rows: Vec<StockRow>,
    pub totals: StockStatementTotals,
}

/// Extracts stock rows from a statement sheet.
///
/// Returns `None` when the header row is absent. Rows whose first cell is
/// empty are skipped; malformed numeric cells coerce to zero.
pub fn read_stocks(sheet: &Sheet) -> Option<StockStatement> {
    let header_index = sheet.find_header_row(STOCK_HEADER_LABEL)?;

    let rows: Vec<StockRow> = sheet.rows[header_index + 1..]
        .iter()
        .filter(|row| !Sheet::cell(row, 0).is_empty())
        .map(|row| StockRow {
            stock: Sheet::cell(row, 0).to_string(),
            isin: Sheet::cell(row, 1).to_string(),
            quantity: parse_amount(Sheet::cell(row, 2)),
            avg_buy_price: parse_amount(Sheet::cell(row, 3)),
            buy_value: parse_amount(Sheet::cell(row, 4)),
            closing_price: parse_amount(Sheet::cell(row, 5)),
            closing_value: parse_amount(Sheet::cell(row, 6)),
            unrealised_pl: parse_amount(Sheet::cell(row, 7)),
        })
        .collect();

    let invested: Decimal = rows.iter().map(|row| row.buy_value).sum();
    let current: Decimal = rows.iter().map(|row| row.closing_value).sum();

    Some(StockStatement {
        rows,
        totals: StockStatementTotals {
            invested,
            current,
            pl: current - invested,
        },
    })
}
