//! Unit tests for the summary service.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::positions::{AssetClass, Position};

fn position(
    owner: &str,
    asset_class: AssetClass,
    name: &str,
    invested: Decimal,
    current: Decimal,
) -> Position {
    let metrics = crate::positions::PerformanceMetrics::from_amounts(invested, current);
    Position {
        owner: owner.to_string(),
        asset_class,
        instrument_id: name.to_string(),
        isin: None,
        folio: None,
        category: None,
        sub_category: None,
        account: None,
        quantity: Decimal::ONE,
        invested,
        current,
        pl: metrics.pl,
        pl_pct: metrics.pl_pct,
        currency: asset_class.currency(),
    }
}

fn mf(owner: &str, name: &str, category: &str, invested: Decimal, current: Decimal) -> Position {
    let mut p = position(owner, AssetClass::MutualFund, name, invested, current);
    p.category = Some(category.to_string());
    p.sub_category = Some(format!("{}-sub", category));
    p
}

fn stock(owner: &str, name: &str, invested: Decimal, current: Decimal) -> Position {
    position(owner, AssetClass::Stock, name, invested, current)
}

fn us(owner: &str, name: &str, invested: Decimal, current: Decimal) -> Position {
    position(owner, AssetClass::UsEquity, name, invested, current)
}

fn service(rate: Decimal) -> SummaryService {
    SummaryService::new(rate).unwrap()
}

#[test]
fn test_rejects_non_positive_fx_rate() {
    assert!(SummaryService::new(Decimal::ZERO).is_err());
    assert!(SummaryService::new(dec!(-83)).is_err());
}

#[test]
fn test_asset_class_totals_and_combined() {
    let mfs = vec![
        mf("Mohan", "FundA", "Equity", dec!(10000), dec!(12000)),
        mf("Swetha", "FundB", "Debt", dec!(5000), dec!(5100)),
    ];
    let stocks = vec![stock("Mohan", "TCS", dec!(32000), dec!(35000))];

    let summary = service(dec!(83)).summarize(&mfs, &stocks, &[]);

    assert_eq!(summary.mutual.invested, dec!(15000));
    assert_eq!(summary.mutual.current, dec!(17100));
    assert_eq!(summary.stocks.current, dec!(35000));
    assert_eq!(summary.combined.invested, dec!(47000));
    assert_eq!(summary.combined.current, dec!(52100));
    assert_eq!(summary.combined.pl, dec!(5100));
}

#[test]
fn test_by_owner_reconciles_with_combined() {
    let mfs = vec![
        mf("Mohan", "FundA", "Equity", dec!(10000), dec!(12000)),
        mf("Swetha", "FundB", "Debt", dec!(5000), dec!(5100)),
    ];
    let stocks = vec![
        stock("Mohan", "TCS", dec!(32000), dec!(35000)),
        stock("Swetha", "INFY", dec!(28000), dec!(26000)),
    ];

    let summary = service(dec!(83)).summarize(&mfs, &stocks, &[]);

    let owner_current: Decimal = summary.by_owner.values().map(|m| m.current).sum();
    assert_eq!(owner_current, summary.combined.current);

    let owner_invested: Decimal = summary.by_owner.values().map(|m| m.invested).sum();
    assert_eq!(owner_invested, summary.combined.invested);
}

#[test]
fn test_duplicate_owner_across_sources_merges() {
    let mfs = vec![mf("Mohan", "FundA", "Equity", dec!(100), dec!(110))];
    let stocks = vec![stock("Mohan", "TCS", dec!(200), dec!(220))];

    let summary = service(dec!(83)).summarize(&mfs, &stocks, &[]);

    assert_eq!(summary.by_owner.len(), 1);
    let mohan = &summary.by_owner["Mohan"];
    assert_eq!(mohan.invested, dec!(300));
    assert_eq!(mohan.current, dec!(330));
}

#[test]
fn test_currency_zone_math() {
    let mfs = vec![mf("Mohan", "FundA", "Equity", dec!(8300), dec!(16600))];
    let stocks = vec![stock("Mohan", "TCS", dec!(8300), dec!(8300))];
    let us_positions = vec![us("Mohan", "AAPL", dec!(100), dec!(150))];

    let summary = service(dec!(83)).summarize(&mfs, &stocks, &us_positions);

    // indiaUsd.current == (mutual.current + stocks.current) / rate
    assert_eq!(summary.india_usd.metrics.current, dec!(300));
    assert_eq!(summary.india_usd.metrics.invested, dec!(200));
    assert_eq!(summary.india_usd.metrics.pl, dec!(100));
    assert_eq!(summary.india_usd.mutual_current, dec!(200));
    assert_eq!(summary.india_usd.stocks_current, dec!(100));

    // globalUsd = indiaUsd + US native totals
    assert_eq!(summary.global_usd.current, dec!(450));
    assert_eq!(summary.global_usd.invested, dec!(300));
    assert_eq!(summary.global_usd.pl, dec!(150));
}

#[test]
fn test_category_breakdown_covers_mutual_funds_only() {
    let mfs = vec![
        mf("Mohan", "FundA", "Equity", dec!(100), dec!(120)),
        mf("Swetha", "FundB", "Equity", dec!(100), dec!(80)),
        mf("Mohan", "FundC", "Debt", dec!(50), dec!(55)),
    ];
    let stocks = vec![stock("Mohan", "TCS", dec!(1000), dec!(1100))];

    let summary = service(dec!(83)).summarize(&mfs, &stocks, &[]);

    assert_eq!(summary.by_category.len(), 2);
    assert_eq!(summary.by_category["Equity"], dec!(200));
    assert_eq!(summary.by_category["Debt"], dec!(55));
    assert_eq!(summary.by_sub_category["Equity-sub"], dec!(200));
}

#[test]
fn test_uncategorized_funds_do_not_participate() {
    let mut uncategorized = mf("Mohan", "FundX", "Equity", dec!(10), dec!(10));
    uncategorized.category = None;
    uncategorized.sub_category = None;

    let summary = service(dec!(83)).summarize(&[uncategorized], &[], &[]);
    assert!(summary.by_category.is_empty());
    assert!(summary.by_sub_category.is_empty());
}

#[test]
fn test_allocation_views() {
    let mfs = vec![mf("Mohan", "FundA", "Equity", dec!(8300), dec!(8300))];
    let stocks = vec![stock("Swetha", "TCS", dec!(16600), dec!(16600))];
    let us_positions = vec![us("Mohan", "AAPL", dec!(100), dec!(150))];

    let summary = service(dec!(83)).summarize(&mfs, &stocks, &us_positions);

    // Native views cover mutual funds + stocks only.
    assert_eq!(summary.asset_allocation.len(), 2);
    assert_eq!(summary.asset_allocation[0].name, "Mutual Funds");
    assert_eq!(summary.asset_allocation[0].value, dec!(8300));
    assert_eq!(summary.owner_allocation.len(), 2);

    // USD views include US holdings.
    assert_eq!(summary.asset_allocation_usd.len(), 3);
    assert_eq!(summary.asset_allocation_usd[2].name, "US Holdings");
    assert_eq!(summary.asset_allocation_usd[2].value, dec!(150));

    let mohan_usd = summary
        .owner_allocation_usd
        .iter()
        .find(|o| o.owner == "Mohan")
        .unwrap();
    assert_eq!(mohan_usd.value, dec!(100) + dec!(150));
}

#[test]
fn test_us_by_owner() {
    let us_positions = vec![
        us("Mohan", "AAPL", dec!(1200), dec!(1502.50)),
        us("Mohan", "VTI", dec!(900), dec!(1100.50)),
        us("Swetha", "SPY", dec!(10000), dec!(12500)),
    ];

    let summary = service(dec!(83)).summarize(&[], &[], &us_positions);

    assert_eq!(summary.us_by_owner.len(), 2);
    let mohan = summary
        .us_by_owner
        .iter()
        .find(|o| o.owner == "Mohan")
        .unwrap();
    assert_eq!(mohan.metrics.invested, dec!(2100));
    assert_eq!(mohan.metrics.current, dec!(2603));
    assert_eq!(summary.us.current, dec!(15103));
}

#[test]
fn test_empty_inputs_yield_zero_aggregates() {
    let summary = service(dec!(83)).summarize(&[], &[], &[]);

    assert_eq!(summary.combined.invested, Decimal::ZERO);
    assert_eq!(summary.combined.pl_pct, Decimal::ZERO);
    assert_eq!(summary.global_usd.current, Decimal::ZERO);
    assert!(summary.by_owner.is_empty());
    assert!(summary.us_by_owner.is_empty());
    assert_eq!(summary.asset_allocation.len(), 2);
    assert_eq!(summary.asset_allocation[0].value, Decimal::ZERO);
}

fn fixture_positions() -> (Vec<Position>, Vec<Position>, Vec<Position>) {
    let mfs = vec![
        mf("Mohan", "FundA", "Equity", dec!(10000), dec!(12000)),
        mf("Mohan", "FundB", "Debt", dec!(5000), dec!(5100)),
        mf("Swetha", "FundC", "Equity", dec!(7000), dec!(6500)),
    ];
    let stocks = vec![
        stock("Mohan", "TCS", dec!(32000), dec!(35000)),
        stock("Swetha", "INFY", dec!(28000), dec!(26000)),
    ];
    let us_positions = vec![
        us("Mohan", "AAPL", dec!(1200), dec!(1502.50)),
        us("Swetha", "VTI", dec!(900), dec!(1100.50)),
    ];
    (mfs, stocks, us_positions)
}

proptest! {
    // Shuffling the input order of any source must not change any
    // aggregate output.
    #[test]
    fn test_summary_is_order_independent(
        mf_order in Just(fixture_positions().0).prop_shuffle(),
        stock_order in Just(fixture_positions().1).prop_shuffle(),
        us_order in Just(fixture_positions().2).prop_shuffle(),
    ) {
        let (mfs, stocks, us_positions) = fixture_positions();
        let baseline = service(dec!(83)).summarize(&mfs, &stocks, &us_positions);
        let shuffled = service(dec!(83)).summarize(&mf_order, &stock_order, &us_order);
        prop_assert_eq!(baseline, shuffled);
    }
}
