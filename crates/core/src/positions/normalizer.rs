//! Normalization of reader rows into canonical positions.
//!
//! Pure, stateless transforms: one function per source row shape. All
//! three delegate P/L derivation to `PerformanceMetrics::from_amounts`.

use crate::positions::positions_model::{AssetClass, PerformanceMetrics, Position};
use crate::sources::{MutualFundRow, StockRow, UsPositionRow};

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn build_position(
    owner: &str,
    asset_class: AssetClass,
    instrument_id: String,
    metrics: PerformanceMetrics,
) -> Position {
    Position {
        owner: owner.to_string(),
        asset_class,
        instrument_id,
        isin: None,
        folio: None,
        category: None,
        sub_category: None,
        account: None,
        quantity: rust_decimal::Decimal::ZERO,
        invested: metrics.invested,
        current: metrics.current,
        pl: metrics.pl,
        pl_pct: metrics.pl_pct,
        currency: asset_class.currency(),
    }
}

/// Normalizes a mutual-fund statement row.
pub fn from_mutual_fund(owner: &str, row: &MutualFundRow) -> Position {
    let metrics = PerformanceMetrics::from_amounts(row.invested, row.current);
    let mut position = build_position(
        owner,
        AssetClass::MutualFund,
        row.scheme.clone(),
        metrics,
    );
    position.folio = non_empty(&row.folio);
    position.category = non_empty(&row.category);
    position.sub_category = non_empty(&row.sub_category);
    position.quantity = row.units;
    position
}

/// Normalizes a stock-holding statement row.
pub fn from_stock(owner: &str, row: &StockRow) -> Position {
    let metrics = PerformanceMetrics::from_amounts(row.buy_value, row.closing_value);
    let mut position = build_position(owner, AssetClass::Stock, row.stock.clone(), metrics);
    position.isin = non_empty(&row.isin);
    position.quantity = row.quantity;
    position
}

/// Normalizes a US brokerage position row.
pub fn from_us_position(owner: &str, row: &UsPositionRow) -> Position {
    let metrics = PerformanceMetrics::from_amounts(row.cost_basis, row.ending_value);
    let mut position = build_position(owner, AssetClass::UsEquity, row.symbol.clone(), metrics);
    position.account = row.account.clone();
    position.quantity = row.quantity;
    position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::positions::positions_model::Currency;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_mutual_fund() {
        let row = MutualFundRow {
            scheme: "FundA".to_string(),
            amc: "AMC1".to_string(),
            category: "Equity".to_string(),
            sub_category: "LargeCap".to_string(),
            folio: "folio1".to_string(),
            source: "src".to_string(),
            units: dec!(100),
            invested: dec!(10000),
            current: dec!(12000),
            returns: dec!(2000),
            xirr: "8%".to_string(),
        };

        let position = from_mutual_fund("Mohan", &row);
        assert_eq!(position.owner, "Mohan");
        assert_eq!(position.asset_class, AssetClass::MutualFund);
        assert_eq!(position.instrument_id, "FundA");
        assert_eq!(position.category.as_deref(), Some("Equity"));
        assert_eq!(position.sub_category.as_deref(), Some("LargeCap"));
        assert_eq!(position.currency, Currency::Inr);
        assert_eq!(position.pl, dec!(2000));
        assert_eq!(position.pl_pct, dec!(20));
    }

    #[test]
    fn test_from_stock_uses_buy_and_closing_values() {
        let row = StockRow {
            stock: "TCS".to_string(),
            isin: "INE467B01029".to_string(),
            quantity: dec!(10),
            avg_buy_price: dec!(3200),
            buy_value: dec!(32000),
            closing_price: dec!(3500),
            closing_value: dec!(35000),
            unrealised_pl: dec!(99999),
        };

        let position = from_stock("Swetha", &row);
        assert_eq!(position.asset_class, AssetClass::Stock);
        assert_eq!(position.isin.as_deref(), Some("INE467B01029"));
        // P/L is derived from buy/closing values, never taken from the
        // statement's own unrealised P/L column.
        assert_eq!(position.pl, dec!(3000));
        assert_eq!(position.currency, Currency::Inr);
    }

    #[test]
    fn test_from_us_position() {
        let row = UsPositionRow {
            symbol: "AAPL".to_string(),
            description: "APPLE INC".to_string(),
            quantity: dec!(10),
            price: dec!(150.25),
            ending_value: dec!(1502.50),
            cost_basis: dec!(1200),
            account: Some("Z1234567".to_string()),
        };

        let position = from_us_position("Mohan", &row);
        assert_eq!(position.asset_class, AssetClass::UsEquity);
        assert_eq!(position.account.as_deref(), Some("Z1234567"));
        assert_eq!(position.currency, Currency::Usd);
        assert_eq!(position.pl, dec!(302.50));
    }

    #[test]
    fn test_blank_classification_normalizes_to_none() {
        let row = MutualFundRow {
            scheme: "FundB".to_string(),
            amc: String::new(),
            category: "  ".to_string(),
            sub_category: String::new(),
            folio: String::new(),
            source: String::new(),
            units: Decimal::ZERO,
            invested: Decimal::ZERO,
            current: Decimal::ZERO,
            returns: Decimal::ZERO,
            xirr: String::new(),
        };

        let position = from_mutual_fund("Mohan", &row);
        assert!(position.category.is_none());
        assert!(position.folio.is_none());
        assert_eq!(position.pl_pct, Decimal::ZERO);
    }
}
