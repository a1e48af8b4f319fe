//! Results aggregation: one call from price levels to a full report.
//!
//! The pipeline is
//!
//! 1. window slice and missing-data policy
//! 2. periodic returns
//! 3. benchmark columns
//! 4. reference rate
//! 5. per profile: portfolio series, metrics, risk decomposition
//! 6. per benchmark: metrics
//! 7. curves and asset correlation
//!
//! Profiles are independent and may run in parallel; the report lists them in
//! request order.

use serde::{Deserialize, Serialize};
use vantage_core::{
    BenchmarkDefinition, BenchmarkKind, Date, DateWindow, PeriodsPerYear, PriceTable, Profile,
    ReturnTable, RoleMap,
};

use crate::annualization::resolve_periods_per_year;
use crate::benchmark::compose_benchmarks;
use crate::config::AnalyticsConfig;
use crate::curve::NamedCurve;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::metrics::{metrics, MetricsRecord, SeriesKind};
use crate::parallel::maybe_parallel_map;
use crate::portfolio::compose_portfolio;
use crate::returns::compute_returns;
use crate::risk::{correlation_of, risk_decomposition, CorrelationMatrix, ReferenceRate, RiskDecomposition};
use crate::warning::{AnalyticsWarning, ReportWarning};

/// Everything an analysis needs besides the price table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisRequest {
    /// Allocations to analyze.
    pub profiles: Vec<Profile>,

    /// Benchmarks to compose and report.
    pub benchmarks: Vec<BenchmarkDefinition>,

    /// Rate subtracted in Sharpe ratios.
    pub reference: ReferenceRate,

    /// Role assignments used by role-based references.
    pub roles: RoleMap,

    /// Analysis period.
    pub window: DateWindow,

    /// Annualization factor.
    pub periods_per_year: PeriodsPerYear,
}

impl AnalysisRequest {
    /// Creates a request for the given profiles with default settings.
    #[must_use]
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles,
            ..Self::default()
        }
    }

    /// Adds a benchmark.
    #[must_use]
    pub fn with_benchmark(mut self, benchmark: BenchmarkDefinition) -> Self {
        self.benchmarks.push(benchmark);
        self
    }

    /// Sets the reference rate.
    #[must_use]
    pub fn with_reference(mut self, reference: ReferenceRate) -> Self {
        self.reference = reference;
        self
    }

    /// Sets the role map.
    #[must_use]
    pub fn with_roles(mut self, roles: RoleMap) -> Self {
        self.roles = roles;
        self
    }

    /// Sets the analysis window.
    #[must_use]
    pub fn with_window(mut self, window: DateWindow) -> Self {
        self.window = window;
        self
    }

    /// Sets the annualization factor.
    #[must_use]
    pub fn with_periods_per_year(mut self, periods_per_year: PeriodsPerYear) -> Self {
        self.periods_per_year = periods_per_year;
        self
    }
}

/// The output of [`analyze`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// First price date used.
    pub start: Date,

    /// Last price date used.
    pub end: Date,

    /// Annualization factor applied.
    pub periods_per_year: u32,

    /// Resolved annual reference rate.
    pub reference_rate: f64,

    /// Profiles in request order, then benchmarks in request order.
    pub metrics: Vec<MetricsRecord>,

    /// Cumulative growth curves starting at the configured base.
    pub cumulative: Vec<NamedCurve>,

    /// Drawdown curves.
    pub drawdowns: Vec<NamedCurve>,

    /// Risk decomposition per profile.
    pub risk: Vec<RiskDecomposition>,

    /// Correlation of the asset columns; absent when too few complete rows.
    pub correlation: Option<CorrelationMatrix>,

    /// Every non-fatal condition, attributed to its source.
    pub warnings: Vec<ReportWarning>,

    /// Profiles that could not be analyzed, in request order.
    pub failures: Vec<ProfileFailure>,
}

/// A profile left out of the report and the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileFailure {
    /// Profile name.
    pub name: String,

    /// Why the profile could not be analyzed.
    pub reason: String,
}

impl AnalysisReport {
    /// Returns the metrics row for a profile or benchmark.
    #[must_use]
    pub fn record(&self, name: &str) -> Option<&MetricsRecord> {
        self.metrics.iter().find(|m| m.name == name)
    }

    /// Returns the risk decomposition of a profile.
    #[must_use]
    pub fn risk_for(&self, profile: &str) -> Option<&RiskDecomposition> {
        self.risk.iter().find(|r| r.name == profile)
    }

    /// Iterates over profile rows.
    pub fn profiles(&self) -> impl Iterator<Item = &MetricsRecord> + '_ {
        self.metrics.iter().filter(|m| m.kind == SeriesKind::Profile)
    }

    /// Iterates over benchmark rows.
    pub fn benchmarks(&self) -> impl Iterator<Item = &MetricsRecord> + '_ {
        self.metrics.iter().filter(|m| m.kind == SeriesKind::Benchmark)
    }
}

struct ProfileOutcome {
    record: MetricsRecord,
    risk: RiskDecomposition,
    cumulative: NamedCurve,
    drawdown: NamedCurve,
    warnings: Vec<AnalyticsWarning>,
}

/// Runs a complete analysis over a price table.
///
/// # Errors
///
/// Any data-shape problem shared by every profile aborts the analysis: an
/// empty or inverted window, fewer than two price rows, or a benchmark or
/// reference naming an absent column or unmapped role.
///
/// A profile that cannot be analyzed on its own, such as one with fewer than
/// two observed returns, is left out and listed in
/// [`AnalysisReport::failures`]. Undefined metrics do not abort; they are NaN
/// and listed in [`AnalysisReport::warnings`].
pub fn analyze(
    prices: &PriceTable,
    request: &AnalysisRequest,
    config: &AnalyticsConfig,
) -> AnalyticsResult<AnalysisReport> {
    let (first, last) = match (prices.first_date(), prices.last_date()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(AnalyticsError::insufficient_data("analyze", 2, 0)),
    };
    let (start, end) = request.window.resolve(first, last)?;
    let window = prices
        .slice(start, end)
        .apply_missing_policy(config.missing_data);
    tracing::debug!(
        window = %request.window,
        %start,
        %end,
        rows = window.len(),
        policy = %config.missing_data,
        "resolved analysis window"
    );

    let returns = compute_returns(&window)?;
    let ppy = resolve_periods_per_year(request.periods_per_year, window.dates())?;

    let definitions = with_periods_per_year(&request.benchmarks, ppy);
    let table = compose_benchmarks(&returns, &definitions)?;
    let reference_rate = request.reference.resolve(&table, &request.roles, ppy)?;
    tracing::debug!(ppy, reference_rate, reference = %request.reference, "resolved reference");

    // Curves start at the last price date before the first return period.
    let curve_start = window.first_date().unwrap_or(start);

    let outcomes = maybe_parallel_map(&request.profiles, config, |profile| {
        analyze_profile(profile, &table, ppy, reference_rate, curve_start, config)
    });

    let mut report = AnalysisReport {
        start: curve_start,
        end: window.last_date().unwrap_or(end),
        periods_per_year: ppy,
        reference_rate,
        metrics: Vec::with_capacity(outcomes.len() + definitions.len()),
        cumulative: Vec::new(),
        drawdowns: Vec::new(),
        risk: Vec::with_capacity(outcomes.len()),
        correlation: None,
        warnings: Vec::new(),
        failures: Vec::new(),
    };

    for (profile, outcome) in request.profiles.iter().zip(outcomes) {
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(profile = %profile.name, error = %e, "profile skipped");
                report.failures.push(ProfileFailure {
                    name: profile.name.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };
        let subject = outcome.record.name.clone();
        report.metrics.push(outcome.record);
        report.risk.push(outcome.risk);
        report.cumulative.push(outcome.cumulative);
        report.drawdowns.push(outcome.drawdown);
        push_warnings(&mut report.warnings, &subject, outcome.warnings);
    }

    for definition in &definitions {
        let series = table.column(&definition.name)?;
        let mut outcome =
            metrics(&series, ppy, reference_rate).map_err(|e| e.during(&definition.name))?;
        outcome.record.kind = SeriesKind::Benchmark;
        report.metrics.push(outcome.record);
        report
            .cumulative
            .push(NamedCurve::cumulative(&series, curve_start, config.curve_base));
        report.drawdowns.push(NamedCurve::drawdown(&series));
        push_warnings(&mut report.warnings, &definition.name, outcome.warnings);
    }

    report.correlation = asset_correlation(&table, prices, &mut report.warnings)?;

    for warning in &report.warnings {
        tracing::warn!(subject = %warning.subject, "{}", warning.warning);
    }
    tracing::debug!(
        profiles = request.profiles.len(),
        benchmarks = definitions.len(),
        warnings = report.warnings.len(),
        failures = report.failures.len(),
        "analysis complete"
    );

    Ok(report)
}

fn analyze_profile(
    profile: &Profile,
    table: &ReturnTable,
    ppy: u32,
    reference_rate: f64,
    curve_start: Date,
    config: &AnalyticsConfig,
) -> AnalyticsResult<ProfileOutcome> {
    let portfolio = compose_portfolio(
        table,
        &profile.weights,
        &profile.name,
        config.weight_sum_tolerance,
    )?;
    let outcome = metrics(&portfolio.series, ppy, reference_rate)
        .map_err(|e| e.during(&profile.name))?;

    let mut risk = risk_decomposition(table, &profile.weights, ppy)
        .map_err(|e| e.during(&profile.name))?;
    risk.name = profile.name.clone();

    let mut record = outcome.record;
    record.kind = SeriesKind::Profile;
    record.weight_sum = Some(portfolio.weight_sum);
    record.risk_contributions = Some(
        risk.shares()
            .map(|(asset, share)| (asset.to_string(), share))
            .collect(),
    );

    // Unknown assets are already reported by the portfolio composer.
    let mut warnings = portfolio.warnings;
    warnings.extend(outcome.warnings);
    warnings.extend(
        risk.warnings
            .iter()
            .filter(|w| !matches!(w, AnalyticsWarning::UnknownAsset { .. }))
            .cloned(),
    );

    Ok(ProfileOutcome {
        cumulative: NamedCurve::cumulative(&portfolio.series, curve_start, config.curve_base),
        drawdown: NamedCurve::drawdown(&portfolio.series),
        record,
        risk,
        warnings,
    })
}

/// Fills in the analysis factor for flat benchmarks that leave it open.
fn with_periods_per_year(definitions: &[BenchmarkDefinition], ppy: u32) -> Vec<BenchmarkDefinition> {
    definitions
        .iter()
        .cloned()
        .map(|mut definition| {
            if let BenchmarkKind::FlatAnnualized {
                periods_per_year, ..
            } = &mut definition.kind
            {
                periods_per_year.get_or_insert(ppy);
            }
            definition
        })
        .collect()
}

fn asset_correlation(
    table: &ReturnTable,
    prices: &PriceTable,
    warnings: &mut Vec<ReportWarning>,
) -> AnalyticsResult<Option<CorrelationMatrix>> {
    let columns: Vec<&str> = prices.columns().iter().map(String::as_str).collect();
    match correlation_of(table, &columns) {
        Ok(matrix) => Ok(Some(matrix)),
        Err(AnalyticsError::InsufficientData { actual, .. }) => {
            warnings.push(ReportWarning {
                subject: "correlation".to_string(),
                warning: AnalyticsWarning::undefined(
                    "correlation",
                    format!("{actual} complete rows, need at least 2"),
                ),
            });
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn push_warnings(out: &mut Vec<ReportWarning>, subject: &str, warnings: Vec<AnalyticsWarning>) {
    out.extend(warnings.into_iter().map(|warning| ReportWarning {
        subject: subject.to_string(),
        warning,
    }));
}
