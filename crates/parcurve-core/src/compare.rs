//! Two-date curve comparison.
//!
//! The later date is always the "current" curve and the earlier one the
//! "baseline", whatever order the caller passes them in. Differences are
//! computed on the tenors both curves quote.

use chrono::NaiveDate;
use serde::Serialize;

use crate::cache::YearlyCache;
use crate::error::{ParCurveError, ParCurveResult};
use crate::source::RateSource;
use crate::tenor::TenorKey;
use crate::types::DailyCurve;

/// Basis points per unit of decimal yield.
const BPS: f64 = 10_000.0;

/// Differences at one tenor.
#[derive(Debug, Clone, Serialize)]
pub struct TenorComparison {
    /// Tenor key in years.
    pub tenor: TenorKey,
    /// Display label (`"10 Yr"`).
    pub label: String,
    /// Baseline yield, decimal.
    pub baseline: f64,
    /// Current yield, decimal.
    pub current: f64,
    /// `(current - baseline) * 10000`.
    pub absolute_diff_bps: f64,
    /// `(current - baseline) / baseline * 100`; NaN when the baseline is zero.
    pub relative_diff_pct: f64,
}

impl TenorComparison {
    fn new(tenor: TenorKey, baseline: f64, current: f64) -> Self {
        let change = current - baseline;
        let relative_diff_pct = if baseline == 0.0 {
            f64::NAN
        } else {
            change / baseline * 100.0
        };
        Self {
            tenor,
            label: tenor.label(),
            baseline,
            current,
            absolute_diff_bps: change * BPS,
            relative_diff_pct,
        }
    }
}

/// Result of comparing two daily curves.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    /// Earlier date.
    pub baseline_date: NaiveDate,
    /// Later date.
    pub current_date: NaiveDate,
    /// Per-tenor differences, shortest tenor first.
    pub tenors: Vec<TenorComparison>,
}

impl ComparisonResult {
    /// Returns the comparison at a tenor, if both curves quote it.
    #[must_use]
    pub fn get(&self, tenor: TenorKey) -> Option<&TenorComparison> {
        self.tenors.iter().find(|t| t.tenor == tenor)
    }

    /// Iterates over per-tenor differences.
    pub fn iter(&self) -> impl Iterator<Item = &TenorComparison> {
        self.tenors.iter()
    }

    /// Number of common tenors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tenors.len()
    }

    /// Always `false` for results produced by this module.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tenors.is_empty()
    }
}

/// Compares two already-loaded curves.
///
/// # Errors
///
/// Returns [`ParCurveError::NoCommonTenors`] if the curves share no tenor.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use parcurve_core::{compare_daily_curves, DailyCurve, TenorKey};
///
/// let jan = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// let feb = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
/// let a = DailyCurve::from_points(feb, [(1.0, 0.052)]);
/// let b = DailyCurve::from_points(jan, [(1.0, 0.050)]);
///
/// let result = compare_daily_curves(&a, &b).unwrap();
/// assert_eq!(result.baseline_date, jan);
/// let one_year = result.get(TenorKey::from_years(1.0)).unwrap();
/// assert!((one_year.absolute_diff_bps - 20.0).abs() < 1e-9);
/// ```
pub fn compare_daily_curves(
    a: &DailyCurve,
    b: &DailyCurve,
) -> ParCurveResult<ComparisonResult> {
    let (baseline, current) = if a.date() < b.date() { (a, b) } else { (b, a) };

    let tenors: Vec<TenorComparison> = baseline
        .points()
        .filter_map(|(tenor, base)| {
            current
                .get(tenor)
                .map(|curr| TenorComparison::new(tenor, base, curr))
        })
        .collect();

    if tenors.is_empty() {
        return Err(ParCurveError::NoCommonTenors {
            baseline: baseline.date(),
            current: current.date(),
        });
    }

    Ok(ComparisonResult {
        baseline_date: baseline.date(),
        current_date: current.date(),
        tenors,
    })
}

/// Loads the curves for two dates and compares them.
///
/// Loader errors are returned unchanged.
pub fn compare_curves<S>(
    date_a: NaiveDate,
    date_b: NaiveDate,
    cache: &mut YearlyCache,
    source: &S,
) -> ParCurveResult<ComparisonResult>
where
    S: RateSource + ?Sized,
{
    let (earlier, later) = if date_a < date_b {
        (date_a, date_b)
    } else {
        (date_b, date_a)
    };

    let baseline = cache.get_curve(earlier, source)?;
    let current = cache.get_curve(later, source)?;
    compare_daily_curves(&current, &baseline)
}
