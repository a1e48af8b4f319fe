//! Integration tests for vantage-analytics.
//!
//! These tests run the full pipeline on small, hand-checkable price tables.

use approx::assert_relative_eq;
use vantage_analytics::prelude::*;
use vantage_core::prelude::*;

// =============================================================================
// TEST FIXTURES
// =============================================================================

/// Month-end dates starting at 2021-12-31.
fn month_ends(n: usize) -> Vec<Date> {
    let start = Date::from_ymd(2021, 12, 31).unwrap();
    (0..n as i32).map(|i| start.add_months(i).unwrap()).collect()
}

/// Builds a price table from per-column period returns, starting at 100.
fn table_from_moves(columns: &[&str], moves: &[Vec<f64>]) -> PriceTable {
    let periods = moves[0].len();
    let mut levels = vec![100.0; columns.len()];
    let mut rows = vec![levels.iter().map(|v| Some(*v)).collect::<Vec<_>>()];
    for t in 0..periods {
        for (level, column) in levels.iter_mut().zip(moves) {
            *level *= 1.0 + column[t];
        }
        rows.push(levels.iter().map(|v| Some(*v)).collect());
    }
    PriceTable::new(
        columns.iter().map(|c| (*c).to_string()).collect(),
        month_ends(periods + 1),
        rows,
    )
    .unwrap()
}

/// A plus-one-percent and a minus-one-percent asset over twelve months.
fn offsetting_assets() -> PriceTable {
    table_from_moves(&["Up", "Down"], &[vec![0.01; 12], vec![-0.01; 12]])
}

fn monthly() -> PeriodsPerYear {
    Frequency::Monthly.into()
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn offsetting_assets_have_zero_return_and_risk() {
    let request = AnalysisRequest::new(vec![Profile::new(
        "Balanced",
        WeightVector::new([("Up", 0.5), ("Down", 0.5)]).unwrap(),
    )])
    .with_periods_per_year(monthly());

    let report = analyze(&offsetting_assets(), &request, &AnalyticsConfig::default()).unwrap();
    let balanced = report.record("Balanced").unwrap();

    assert_eq!(balanced.observations, 12);
    assert_relative_eq!(balanced.annualized_return, 0.0, epsilon = 1e-12);
    assert_eq!(balanced.annualized_volatility, 0.0);
    assert!(balanced.sharpe_ratio.is_nan());
    assert!(balanced.max_drawdown.abs() < 1e-12);

    // Undefined values are reported, not raised
    assert!(report.warnings.iter().any(|w| w.subject == "Balanced"
        && w.warning == AnalyticsWarning::undefined("sharpe_ratio", "annualized volatility is zero")));

    let risk = report.risk_for("Balanced").unwrap();
    assert_eq!(risk.volatility, 0.0);
    assert!(risk.contributions.iter().all(|c| c.share.is_nan()));
}

#[test]
fn single_asset_annualization() {
    let returns = compute_returns(&offsetting_assets()).unwrap();
    let up = metrics(&returns.column("Up").unwrap(), 12, 0.0).unwrap().record;

    assert_relative_eq!(up.annualized_return, 1.01_f64.powi(12) - 1.0, epsilon = 1e-12);
    assert_relative_eq!(up.total_return, 1.01_f64.powi(12) - 1.0, epsilon = 1e-12);
    assert_eq!(up.max_drawdown, 0.0);

    let down = metrics(&returns.column("Down").unwrap(), 12, 0.0).unwrap().record;
    // Peak is the level after the first month.
    assert_relative_eq!(down.max_drawdown, 0.99_f64.powi(11) - 1.0, epsilon = 1e-12);
}

#[test]
fn cpi_flat_mode_reannualizes_to_level_growth() {
    let cpi_moves = vec![0.004, 0.001, 0.006, 0.002, 0.0, 0.003, 0.005, 0.001, 0.002, 0.004, 0.003, 0.001];
    let equity_moves = vec![0.03, -0.02, 0.04, -0.05, 0.02, 0.01, 0.03, -0.01, 0.02, 0.00, -0.03, 0.05];
    let prices = table_from_moves(&["CPI", "Equity"], &[cpi_moves, equity_moves]);

    let request = AnalysisRequest::new(vec![Profile::new(
        "Equity only",
        WeightVector::new([("Equity", 1.0)]).unwrap(),
    )])
    .with_benchmark(BenchmarkDefinition::flat_annualized("CPI target", "CPI", None))
    .with_benchmark(BenchmarkDefinition::single("CPI raw", "CPI"))
    .with_periods_per_year(monthly());

    let report = analyze(&prices, &request, &AnalyticsConfig::sequential()).unwrap();

    let cpi = prices.column("CPI").unwrap();
    let level_growth = cpi[12].unwrap() / cpi[0].unwrap();
    let expected = annualize_from_levels(1.0, level_growth, 12, 12).unwrap();

    let target = report.record("CPI target").unwrap();
    assert_eq!(target.kind, SeriesKind::Benchmark);
    assert_relative_eq!(target.annualized_return, expected, epsilon = 1e-12);
    assert_relative_eq!(target.total_return, level_growth - 1.0, epsilon = 1e-12);
    assert_eq!(target.annualized_volatility, 0.0);
    assert!(target.sharpe_ratio.is_nan());

    // The raw column compounds its mean, which differs from level growth
    let raw = report.record("CPI raw").unwrap();
    assert!(raw.annualized_volatility > 0.0);
    assert_relative_eq!(raw.total_return, level_growth - 1.0, epsilon = 1e-12);
}

#[test]
fn identical_columns_reproduce_the_column() {
    let moves = vec![0.02, -0.01, 0.03, 0.00, -0.02, 0.01];
    let prices = table_from_moves(&["A", "B"], &[moves.clone(), moves]);
    let returns = compute_returns(&prices).unwrap();

    let weights = WeightVector::new([("A", 0.5), ("B", 0.5)]).unwrap();
    let portfolio = compose_portfolio(&returns, &weights, "Half", 1e-6).unwrap();
    let column = returns.column("A").unwrap();

    for (p, a) in portfolio.series.values().iter().zip(column.values()) {
        assert_relative_eq!(p.unwrap(), a.unwrap(), epsilon = 1e-15);
    }
}

#[test]
fn hybrid_benchmark_blends_columns() {
    let prices = table_from_moves(
        &["Equity", "Global Agg"],
        &[vec![0.04, -0.02, 0.01], vec![0.01, 0.005, -0.002]],
    );
    let returns = compute_returns(&prices).unwrap();
    let table = compose_benchmarks(
        &returns,
        &[BenchmarkDefinition::hybrid("10/90", "Equity", "Global Agg", 0.1)],
    )
    .unwrap();

    let blend = table.column("10/90").unwrap();
    assert_relative_eq!(blend.values()[0].unwrap(), 0.1 * 0.04 + 0.9 * 0.01, epsilon = 1e-12);
    assert_relative_eq!(blend.values()[2].unwrap(), 0.1 * 0.01 - 0.9 * 0.002, epsilon = 1e-12);
}

// =============================================================================
// WINDOWS AND MISSING DATA
// =============================================================================

fn two_years() -> PriceTable {
    let moves: Vec<f64> = (0..24).map(|i| if i % 3 == 0 { -0.01 } else { 0.015 }).collect();
    table_from_moves(&["Equity"], &[moves])
}

fn equity_request(window: DateWindow) -> AnalysisRequest {
    AnalysisRequest::new(vec![Profile::new(
        "All equity",
        WeightVector::new([("Equity", 1.0)]).unwrap(),
    )])
    .with_window(window)
    .with_periods_per_year(monthly())
}

#[test]
fn window_resolution() {
    let prices = two_years();
    let last = prices.last_date().unwrap();
    let config = AnalyticsConfig::sequential();

    let ytd = analyze(&prices, &equity_request(DateWindow::YearToDate), &config).unwrap();
    assert_eq!(ytd.start, Date::from_ymd(2023, 1, 31).unwrap());
    assert_eq!(ytd.end, last);
    assert_eq!(ytd.metrics[0].observations, 11);

    let trailing = analyze(&prices, &equity_request(DateWindow::TRAILING_12M), &config).unwrap();
    assert_eq!(trailing.start, Date::from_ymd(2022, 12, 31).unwrap());
    assert_eq!(trailing.metrics[0].observations, 12);

    // 36 months clamps to the first available date
    let clamped = analyze(&prices, &equity_request(DateWindow::TRAILING_36M), &config).unwrap();
    let max = analyze(&prices, &equity_request(DateWindow::Max), &config).unwrap();
    assert_eq!(clamped.start, prices.first_date().unwrap());
    assert_eq!(clamped.metrics, max.metrics);
}

#[test]
fn custom_window_outside_data_fails() {
    let window = DateWindow::Custom {
        start: Date::from_ymd(2030, 1, 1).unwrap(),
        end: Date::from_ymd(2030, 12, 31).unwrap(),
    };
    let err = analyze(&two_years(), &equity_request(window), &AnalyticsConfig::default())
        .unwrap_err();
    assert!(matches!(
        err,
        AnalyticsError::Data(VantageError::InvalidWindow { .. })
    ));
}

fn gappy() -> PriceTable {
    PriceTable::new(
        vec!["A".into(), "B".into()],
        month_ends(5),
        vec![
            vec![Some(100.0), Some(100.0)],
            vec![Some(102.0), None],
            vec![Some(101.0), Some(103.0)],
            vec![Some(104.0), Some(104.0)],
            vec![Some(103.0), Some(102.0)],
        ],
    )
    .unwrap()
}

fn gappy_request() -> AnalysisRequest {
    AnalysisRequest::new(vec![Profile::new(
        "Mix",
        WeightVector::new([("A", 0.5), ("B", 0.5)]).unwrap(),
    )])
    .with_periods_per_year(monthly())
}

#[test]
fn missing_data_policies() {
    let keep = analyze(
        &gappy(),
        &gappy_request(),
        &AnalyticsConfig::sequential().with_missing_data(MissingDataPolicy::Keep),
    )
    .unwrap();
    // The gap voids the period into and out of the missing month
    assert_eq!(keep.metrics[0].observations, 2);

    let filled = analyze(
        &gappy(),
        &gappy_request(),
        &AnalyticsConfig::sequential().with_missing_data(MissingDataPolicy::ForwardFill),
    )
    .unwrap();
    assert_eq!(filled.metrics[0].observations, 4);

    let dropped = analyze(
        &gappy(),
        &gappy_request(),
        &AnalyticsConfig::sequential().with_missing_data(MissingDataPolicy::DropAny),
    )
    .unwrap();
    assert_eq!(dropped.metrics[0].observations, 3);
}

#[test]
fn too_few_rows_is_an_error() {
    let prices = two_years();
    let last = prices.last_date().unwrap();
    let window = DateWindow::Custom {
        start: last,
        end: last,
    };
    let err = analyze(&prices, &equity_request(window), &AnalyticsConfig::default()).unwrap_err();
    assert_eq!(err, AnalyticsError::insufficient_data("compute_returns", 2, 1));
}

#[test]
fn report_serializes_to_json() {
    let report = analyze(&two_years(), &equity_request(DateWindow::Max), &AnalyticsConfig::default())
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["periods_per_year"], 12);
    assert_eq!(json["metrics"][0]["kind"], "profile");
    assert_eq!(json["start"], "2021-12-31");
}
