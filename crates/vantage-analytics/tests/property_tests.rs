//! Property-based tests for analytics invariants.
//!
//! These tests verify key mathematical properties that should always hold:
//! - Returns have one row fewer than prices
//! - Compounding and re-differencing round trip
//! - Risk shares sum to 100%
//! - Drawdowns are never positive
//! - Sharpe is undefined, not an error, at zero volatility

use approx::assert_relative_eq;
use proptest::prelude::*;
use vantage_analytics::prelude::*;
use vantage_analytics::{flat_period_rate, returns_from_growth};
use vantage_core::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Simple deterministic hash for test data generation.
fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_add(i).wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x
}

/// Periodic return in roughly [-5%, +5%].
fn pseudo_return(seed: u64, i: u64) -> f64 {
    (simple_hash(seed, i) % 1001) as f64 / 10_000.0 - 0.05
}

fn dates(n: usize) -> Vec<Date> {
    let start = Date::from_ymd(2015, 1, 31).unwrap();
    (0..n as i32).map(|i| start.add_months(i).unwrap()).collect()
}

/// A price table with `assets` columns and `periods + 1` rows.
fn generate_prices(assets: usize, periods: usize, seed: u64) -> PriceTable {
    let columns: Vec<String> = (0..assets).map(|a| format!("Asset{a}")).collect();
    let mut levels = vec![100.0; assets];
    let mut rows = vec![levels.iter().map(|v| Some(*v)).collect::<Vec<_>>()];
    for t in 0..periods {
        for (a, level) in levels.iter_mut().enumerate() {
            *level *= 1.0 + pseudo_return(seed + a as u64 * 7919, t as u64);
        }
        rows.push(levels.iter().map(|v| Some(*v)).collect());
    }
    PriceTable::new(columns, dates(periods + 1), rows).unwrap()
}

/// Weights in [0, 1) per asset, not normalized.
fn generate_weights(assets: usize, seed: u64) -> WeightVector {
    WeightVector::new(
        (0..assets).map(|a| (format!("Asset{a}"), (simple_hash(seed, a as u64) % 100) as f64 / 100.0)),
    )
    .unwrap()
}

// =============================================================================
// PROPERTY: RETURN TABLE SHAPE
// =============================================================================

#[test]
fn property_returns_have_one_row_fewer() {
    for seed in 0..10 {
        for (assets, periods) in [(1, 1), (3, 12), (6, 60)] {
            let prices = generate_prices(assets, periods, seed);
            let returns = compute_returns(&prices).unwrap();

            assert_eq!(returns.len(), prices.len() - 1);
            assert_eq!(returns.columns(), prices.columns());
            assert_eq!(returns.dates(), &prices.dates()[1..]);
        }
    }
}

// =============================================================================
// PROPERTY: GROWTH ROUND TRIP
// =============================================================================

#[test]
fn property_growth_round_trip() {
    for seed in 0..20 {
        let prices = generate_prices(1, 36, seed);
        let series = compute_returns(&prices).unwrap().column("Asset0").unwrap();

        let growth = cumulative_growth(&series);
        let recovered = returns_from_growth(&growth);

        for (r, back) in series.values().iter().zip(&recovered) {
            assert_relative_eq!(r.unwrap(), back.unwrap(), epsilon = 1e-12);
        }

        // Growth matches the price ratio
        let levels = prices.column("Asset0").unwrap();
        let ratio = levels[36].unwrap() / levels[0].unwrap();
        assert_relative_eq!(*growth.last().unwrap(), ratio, epsilon = 1e-10);
    }
}

// =============================================================================
// PROPERTY: RISK SHARES SUM TO 100%
// =============================================================================

#[test]
fn property_risk_shares_sum_to_one() {
    for seed in 0..10 {
        for assets in [2, 4, 6] {
            let returns = compute_returns(&generate_prices(assets, 48, seed)).unwrap();
            let weights = generate_weights(assets, seed);
            let risk = risk_decomposition(&returns, &weights, 12).unwrap();

            if risk.volatility == 0.0 {
                continue;
            }
            let total: f64 = risk.contributions.iter().map(|c| c.share).sum();
            assert!(
                (total - 1.0).abs() < 1e-9,
                "Risk shares should sum to 1, got {} for assets={}, seed={}",
                total,
                assets,
                seed
            );
        }
    }
}

#[test]
fn property_decomposed_volatility_matches_series() {
    for seed in 0..10 {
        let returns = compute_returns(&generate_prices(4, 36, seed)).unwrap();
        let weights = generate_weights(4, seed);

        let portfolio = compose_portfolio(&returns, &weights, "p", 1e-6).unwrap();
        let series_vol = annualized_volatility(&portfolio.series, 12).unwrap();
        let risk = risk_decomposition(&returns, &weights, 12).unwrap();

        assert_relative_eq!(risk.volatility, series_vol, epsilon = 1e-10);
    }
}

// =============================================================================
// PROPERTY: DRAWDOWN
// =============================================================================

#[test]
fn property_drawdown_never_positive() {
    for seed in 0..20 {
        let series = compute_returns(&generate_prices(1, 60, seed))
            .unwrap()
            .column("Asset0")
            .unwrap();
        let dd = drawdown(&series);

        assert!(dd.iter().all(|d| *d <= 0.0));
        assert_eq!(max_drawdown(&series), dd.iter().copied().fold(0.0, f64::min));
    }
}

// =============================================================================
// PROPERTY: IDENTICAL COLUMNS
// =============================================================================

#[test]
fn property_split_across_identical_columns() {
    for seed in 0..10 {
        let prices = generate_prices(1, 24, seed);
        let levels = prices.column("Asset0").unwrap();
        let twin = PriceTable::new(
            vec!["A".into(), "B".into()],
            prices.dates().to_vec(),
            levels.iter().map(|v| vec![*v, *v]).collect(),
        )
        .unwrap();
        let returns = compute_returns(&twin).unwrap();

        let weights = WeightVector::new([("A", 0.5), ("B", 0.5)]).unwrap();
        let portfolio = compose_portfolio(&returns, &weights, "Split", 1e-6).unwrap();
        assert_eq!(portfolio.series.values(), returns.column("A").unwrap().values());
    }
}

// =============================================================================
// RANDOMIZED PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_drawdown_zero_iff_non_decreasing(moves in prop::collection::vec(-0.2f64..0.2, 2..40)) {
        let series = ReturnSeries::from_values("p", dates(moves.len()), moves.clone()).unwrap();
        let mdd = max_drawdown(&series);

        // Growth starts at the first period, so only later moves can fall.
        prop_assert!(mdd <= 0.0);
        if moves[1..].iter().all(|r| *r >= 0.0) {
            prop_assert_eq!(mdd, 0.0);
        }
        if moves[1..].iter().any(|r| *r < -1e-9) {
            prop_assert!(mdd < 0.0);
        }
    }

    #[test]
    fn prop_sharpe_nan_at_zero_volatility(rate in -0.05f64..0.05, n in 2usize..30) {
        let series = ReturnSeries::from_values("flat", dates(n), vec![rate; n]).unwrap();
        let outcome = metrics(&series, 12, 0.01).unwrap();

        prop_assert_eq!(outcome.record.annualized_volatility, 0.0);
        prop_assert!(outcome.record.sharpe_ratio.is_nan());
        prop_assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn prop_flat_rate_reannualizes(annual in -0.5f64..0.5, ppy in 1u32..=365) {
        let period = flat_period_rate(annual, ppy);
        let back = annualize_return(period, ppy);
        prop_assert!((back - annual).abs() < 1e-9);
    }
}
