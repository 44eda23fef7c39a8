//! Ranking of holdings by current value.

use crate::positions::Position;

use super::top_holdings_model::TopHoldingEntry;

/// Selects the top `limit` positions by current value, descending.
///
/// The sort is stable: positions with equal current value keep their
/// input order. There is deliberately no secondary sort key.
pub fn top_holdings(positions: &[Position], limit: usize) -> Vec<TopHoldingEntry> {
    let mut ranked: Vec<&Position> = positions.iter().collect();
    ranked.sort_by(|a, b| b.current.cmp(&a.current));
    ranked
        .into_iter()
        .take(limit)
        .map(|position| TopHoldingEntry {
            name: position.instrument_id.clone(),
            owner: position.owner.clone(),
            current: position.current,
            pl: position.pl,
            pl_pct: position.pl_pct,
            category: position.category.clone(),
            account: position.account.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::positions::{AssetClass, PerformanceMetrics};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn position(owner: &str, name: &str, invested: Decimal, current: Decimal) -> Position {
        let metrics = PerformanceMetrics::from_amounts(invested, current);
        Position {
            owner: owner.to_string(),
            asset_class: AssetClass::MutualFund,
            instrument_id: name.to_string(),
            isin: None,
            folio: None,
            category: Some("Equity".to_string()),
            sub_category: None,
            account: None,
            quantity: Decimal::ONE,
            invested,
            current,
            pl: metrics.pl,
            pl_pct: metrics.pl_pct,
            currency: AssetClass::MutualFund.currency(),
        }
    }

    #[test]
    fn test_ranks_descending_by_current() {
        let positions = vec![
            position("Mohan", "Small", dec!(100), dec!(110)),
            position("Mohan", "Big", dec!(100), dec!(500)),
            position("Swetha", "Mid", dec!(100), dec!(250)),
        ];

        let top = top_holdings(&positions, 5);
        let names: Vec<&str> = top.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Big", "Mid", "Small"]);
        assert_eq!(top[0].pl, dec!(400));
        assert_eq!(top[0].category.as_deref(), Some("Equity"));
    }

    #[test]
    fn test_limit_is_applied() {
        let positions: Vec<Position> = (0..8)
            .map(|i| position("Mohan", &format!("Fund{}", i), dec!(100), Decimal::from(100 + i)))
            .collect();

        let top = top_holdings(&positions, 5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].name, "Fund7");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let positions = vec![
            position("Mohan", "First", dec!(100), dec!(200)),
            position("Swetha", "Second", dec!(100), dec!(200)),
            position("Mohan", "Third", dec!(100), dec!(200)),
        ];

        let top = top_holdings(&positions, 5);
        let names: Vec<&str> = top.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(top_holdings(&[], 5).is_empty());
    }
}
