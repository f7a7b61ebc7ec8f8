//! A single day's par yield curve.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::tenor::TenorKey;

/// Par yields for one business day, keyed by tenor.
///
/// Only tenors quoted that day are present; blank source cells are never
/// stored as zero.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use parcurve_core::{DailyCurve, TenorKey};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let curve = DailyCurve::from_points(date, [(1.0, 0.05), (10.0, 0.045)]);
/// assert_eq!(curve.len(), 2);
/// assert_eq!(curve.get(TenorKey::from_years(1.0)), Some(0.05));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DailyCurve {
    date: NaiveDate,
    yields: BTreeMap<TenorKey, f64>,
}

impl DailyCurve {
    /// Creates a curve from tenor keys and decimal yields.
    pub fn new(date: NaiveDate, yields: impl IntoIterator<Item = (TenorKey, f64)>) -> Self {
        Self {
            date,
            yields: yields.into_iter().collect(),
        }
    }

    /// Creates a curve from `(years, yield)` pairs.
    pub fn from_points(date: NaiveDate, points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self::new(
            date,
            points
                .into_iter()
                .map(|(years, value)| (TenorKey::from_years(years), value)),
        )
    }

    /// Returns the curve date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the yield at a tenor, if quoted.
    #[must_use]
    pub fn get(&self, tenor: TenorKey) -> Option<f64> {
        self.yields.get(&tenor).copied()
    }

    /// Returns `true` if the tenor is quoted.
    #[must_use]
    pub fn contains(&self, tenor: TenorKey) -> bool {
        self.yields.contains_key(&tenor)
    }

    /// Iterates over `(tenor, yield)` pairs, shortest tenor first.
    pub fn points(&self) -> impl Iterator<Item = (TenorKey, f64)> + '_ {
        self.yields.iter().map(|(&k, &v)| (k, v))
    }

    /// Iterates over the quoted tenors, shortest first.
    pub fn tenors(&self) -> impl Iterator<Item = TenorKey> + '_ {
        self.yields.keys().copied()
    }

    /// Number of quoted tenors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.yields.len()
    }

    /// Returns `true` if no tenor is quoted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.yields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 30).unwrap()
    }

    #[test]
    fn test_points_are_ordered_by_tenor() {
        let curve = DailyCurve::from_points(date(), [(30.0, 0.04), (0.0833, 0.05), (2.0, 0.048)]);
        let tenors: Vec<f64> = curve.tenors().map(|t| t.years()).collect();
        assert_eq!(tenors, vec![0.0833, 2.0, 30.0]);
    }

    #[test]
    fn test_missing_tenor() {
        let curve = DailyCurve::from_points(date(), [(1.0, 0.05)]);
        assert!(curve.contains(TenorKey::from_years(1.0)));
        assert_eq!(curve.get(TenorKey::from_years(2.0)), None);
        assert!(!curve.is_empty());
    }
}
