//! Descriptive statistics for yield series.

use serde::Serialize;
use statrs::statistics::Statistics;

use crate::tenor::TenorKey;
use crate::types::DailyCurve;

/// Row labels of a summary table, in output order.
pub const SUMMARY_ROWS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Count, moments and quartiles of one tenor's series.
///
/// `std` is the sample standard deviation (n - 1). Quartiles use linear
/// interpolation between closest ranks. Empty series yield NaN for every
/// field except `count`.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryStatistics {
    /// Tenor the series belongs to.
    pub tenor: TenorKey,
    /// Number of observations.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation.
    pub std: f64,
    /// Minimum.
    pub min: f64,
    /// First quartile.
    pub q25: f64,
    /// Median.
    pub median: f64,
    /// Third quartile.
    pub q75: f64,
    /// Maximum.
    pub max: f64,
}

impl SummaryStatistics {
    /// Computes statistics over the observations of one tenor.
    #[must_use]
    pub fn from_values(tenor: TenorKey, values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let (min, max) = if values.is_empty() {
            (f64::NAN, f64::NAN)
        } else {
            (Statistics::min(values.iter()), Statistics::max(values.iter()))
        };

        Self {
            tenor,
            count: values.len(),
            mean: Statistics::mean(values.iter()),
            std: Statistics::std_dev(values.iter()),
            min,
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max,
        }
    }

    /// Values in [`SUMMARY_ROWS`] order.
    #[must_use]
    pub fn row_values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.median,
            self.q75,
            self.max,
        ]
    }
}

/// Summarizes each tenor column across a set of curves.
///
/// Days on which a tenor was not quoted do not count towards its series.
#[must_use]
pub fn describe(tenors: &[TenorKey], curves: &[DailyCurve]) -> Vec<SummaryStatistics> {
    tenors
        .iter()
        .map(|&tenor| {
            let values: Vec<f64> = curves.iter().filter_map(|c| c.get(tenor)).collect();
            SummaryStatistics::from_values(tenor, &values)
        })
        .collect()
}

/// Linear-interpolation quantile of an ascending slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = q * (n - 1) as f64;
            let lower = pos.floor() as usize;
            let upper = (lower + 1).min(n - 1);
            let weight = pos - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * weight
        }
    }
}
