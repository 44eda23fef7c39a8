//! Reader for US brokerage account CSV exports.
//!
//! The export concatenates several accounts into one file. Each account
//! section is introduced by a marker line holding a single `Z<digits>`
//! token; every data row that follows belongs to that account until the
//! next marker. The `Z<digits>` rule is a documented quirk of one
//! brokerage's export format, not a general CSV contract.

use csv::{ReaderBuilder, Terminator};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::sources::sheet::parse_amount;

lazy_static! {
    /// Account section markers, e.g. "Z1234567".
    static ref ACCOUNT_TAG_REGEX: Regex =
        Regex::new(r"^Z\d+$").expect("Invalid regex pattern");
}

/// One raw US brokerage position row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsPositionRow {
    pub symbol: String,
    pub description: String,
    pub quantity: Decimal,
    pub price: Decimal,
    pub ending_value: Decimal,
    pub cost_basis: Decimal,
    /// Account tag from the most recent marker line, `None` before any
    /// marker has been seen.
    pub account: Option<String>,
}

/// Parser state: outside any account section, or inside the tagged one.
enum AccountState {
    NoAccount,
    InAccount(String),
}

/// Extracts position rows from raw US brokerage CSV text.
///
/// Header and subtotal lines are skipped; rows where quantity, ending
/// value and cost basis are all zero are dropped as noise (stray
/// separator lines). Never fails: unparseable lines are simply not
/// positions.
pub fn read_us_positions(text: &str) -> Vec<UsPositionRow> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(text.as_bytes());

    let mut state = AccountState::NoAccount;
    let mut positions = Vec::new();

    for record in reader.records().flatten() {
        let fields: Vec<&str> = record.iter().map(|field| field.trim()).collect();
        let first = fields.first().copied().unwrap_or("");

        // Account marker: a line holding a single Z<digits> token.
        if ACCOUNT_TAG_REGEX.is_match(first) && fields[1..].iter().all(|f| f.is_empty()) {
            state = AccountState::InAccount(first.to_string());
            continue;
        }

        if first.is_empty()
            || first == "Symbol/CUSIP"
            || first == "Account Type"
            || first.starts_with("Subtotal")
        {
            continue;
        }

        if fields.len() < 7 {
            continue;
        }

        let quantity = parse_amount(fields[2]);
        let price = parse_amount(fields[3]);
        let ending_value = parse_amount(fields[5]);
        let cost_basis = parse_amount(fields[6]);

        // All-zero rows are noise, e.g. stray separator lines.
        if quantity.is_zero() && ending_value.is_zero() && cost_basis.is_zero() {
            continue;
        }

        positions.push(UsPositionRow {
            symbol: first.to_string(),
            description: fields[1].to_string(),
            quantity,
            price,
            ending_value,
            cost_basis,
            account: match &state {
                AccountState::NoAccount => None,
                AccountState::InAccount(tag) => Some(tag.clone()),
            },
        });
    }

    positions
}
