//! A calendar year of daily curves.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use super::DailyCurve;
use crate::tenor::TenorKey;

/// Every published business-day curve for one calendar year.
///
/// Built once when the year is first requested and never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyTable {
    year: i32,
    rows: BTreeMap<NaiveDate, DailyCurve>,
}

impl YearlyTable {
    /// Builds a table from parsed curves, keyed by their dates.
    ///
    /// A repeated date keeps the last curve seen.
    pub fn new(year: i32, curves: impl IntoIterator<Item = DailyCurve>) -> Self {
        Self {
            year,
            rows: curves.into_iter().map(|c| (c.date(), c)).collect(),
        }
    }

    /// Returns the calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the curve for an exact date.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&DailyCurve> {
        self.rows.get(&date)
    }

    /// Iterates over the curves in date order.
    pub fn curves(&self) -> impl Iterator<Item = &DailyCurve> {
        self.rows.values()
    }

    /// Iterates over the dates with data.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.rows.keys().copied()
    }

    /// First and last dates with data.
    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.rows.keys().next()?;
        let last = self.rows.keys().next_back()?;
        Some((*first, *last))
    }

    /// Union of tenors quoted on any day of the year.
    #[must_use]
    pub fn tenors(&self) -> BTreeSet<TenorKey> {
        self.rows.values().flat_map(DailyCurve::tenors).collect()
    }

    /// Number of business days in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    #[test]
    fn test_rows_sorted_and_looked_up_exactly() {
        let table = YearlyTable::new(
            2024,
            vec![
                DailyCurve::from_points(d(3, 4), [(1.0, 0.05)]),
                DailyCurve::from_points(d(3, 1), [(1.0, 0.049), (0.0833, 0.055)]),
            ],
        );

        assert_eq!(table.len(), 2);
        assert_eq!(table.date_range(), Some((d(3, 1), d(3, 4))));
        assert!(table.get(d(3, 2)).is_none());
        assert_eq!(
            table.get(d(3, 1)).unwrap().get(TenorKey::from_years(1.0)),
            Some(0.049)
        );
        assert_eq!(table.tenors().len(), 2);
    }

    #[test]
    fn test_empty_table() {
        let table = YearlyTable::new(2024, Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.date_range(), None);
    }
}
