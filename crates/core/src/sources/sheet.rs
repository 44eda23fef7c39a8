//! Shared tabular infrastructure for the sheet-shaped sources.
//!
//! A `Sheet` is an ordered sequence of rows, each an ordered sequence of
//! string cells, decoded from a CSV export. Readers locate their header row
//! by label and map fixed column positions to fields.

use std::str::FromStr;

use csv::{ReaderBuilder, Terminator};
use rust_decimal::Decimal;

use crate::errors::{Error, Result};

/// An in-memory tabular source: rows of string cells.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Parses CSV bytes into a sheet.
    ///
    /// Handles a UTF-8 BOM, tolerates invalid UTF-8 via lossy decoding,
    /// allows rows of varying width, and drops fully empty rows. An
    /// unreadable byte stream is an error; the caller decides whether
    /// that degrades to an empty source.
    pub fn from_csv_bytes(content: &[u8]) -> Result<Self> {
        let without_bom = if content.starts_with(&[0xEF, 0xBB, 0xBF]) {
            &content[3..]
        } else {
            content
        };
        let text = String::from_utf8_lossy(without_bom);

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .terminator(Terminator::Any(b'\n'))
            .from_reader(text.as_bytes());

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| Error::Validation(e.to_string()))?;
            let row: Vec<String> = record.iter().map(|cell| cell.to_string()).collect();
            if row.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            rows.push(row);
        }
        Ok(Self { rows })
    }

    /// Finds the first row containing a cell whose trimmed text equals
    /// `label` exactly. Returns the row index, or `None` if the sheet has
    /// no such row (structural mismatch).
    pub fn find_header_row(&self, label: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.iter().any(|cell| cell.trim() == label))
    }

    /// Returns the trimmed cell at `(row, col)`, or `""` if absent.
    pub fn cell<'a>(row: &'a [String], col: usize) -> &'a str {
        row.get(col).map(|c| c.trim()).unwrap_or("")
    }
}

/// Coerces a raw cell into a monetary/quantity value.
///
/// Strips thousands separators, currency symbols, percent signs and inner
/// whitespace before parsing. Anything that still fails to parse coerces
/// to zero; this function never errors because malformed cells must not
/// abort a composition.
pub fn parse_amount(raw: &str) -> Decimal {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '₹' | '$' | '%') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}
