//! Integration tests: fetch, cache, look up, compare and export through an
//! in-memory rate source.

use std::cell::Cell;
use std::collections::HashMap;

use approx::assert_relative_eq;
use chrono::NaiveDate;
use proptest::prelude::*;

use parcurve_core::{
    compare_curves, export_archive, get_curve, ExportSettings, ParCurveError, RateSource,
    SourceError, TenorKey, YearlyCache,
};

/// Serves fixed CSV per year and counts fetches.
struct MemorySource {
    years: HashMap<i32, String>,
    archive: Option<String>,
    fetches: Cell<usize>,
}

impl MemorySource {
    fn new() -> Self {
        Self {
            years: HashMap::new(),
            archive: None,
            fetches: Cell::new(0),
        }
    }

    fn with_year(mut self, year: i32, csv: &str) -> Self {
        self.years.insert(year, csv.to_string());
        self
    }

    fn with_archive(mut self, csv: &str) -> Self {
        self.archive = Some(csv.to_string());
        self
    }
}

impl RateSource for MemorySource {
    fn fetch_year(&self, year: i32) -> Result<String, SourceError> {
        self.fetches.set(self.fetches.get() + 1);
        self.years
            .get(&year)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(format!("{year}.csv")))
    }

    fn fetch_archive(&self) -> Result<String, SourceError> {
        self.archive
            .clone()
            .ok_or_else(|| SourceError::NotFound("archive".into()))
    }
}

const Y2023: &str = "\
Date,1 Mo,2 Mo,3 Mo,4 Mo,6 Mo,1 Yr,2 Yr,3 Yr,5 Yr,7 Yr,10 Yr,20 Yr,30 Yr
12/29/2023,5.60,5.59,5.40,5.41,5.26,4.79,4.23,4.01,3.84,3.88,3.88,4.20,4.03
01/03/2023,4.17,4.42,4.53,4.70,4.77,4.72,4.40,4.18,3.94,3.89,3.79,4.06,3.88
";

const Y2024: &str = "\
Date,1 Mo,1.5 Month,2 Mo,3 Mo,4 Mo,6 Mo,1 Yr,2 Yr,3 Yr,5 Yr,7 Yr,10 Yr,20 Yr,30 Yr
03/01/2024,5.53,,5.50,5.45,5.42,5.33,5.00,4.53,4.31,4.14,4.16,4.18,4.44,4.32
";

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_lookup_across_years_fetches_each_year_once() {
    let source = MemorySource::new().with_year(2023, Y2023).with_year(2024, Y2024);
    let mut cache = YearlyCache::new();

    let a = get_curve(ymd(2023, 12, 29), &mut cache, &source).unwrap();
    let b = get_curve(ymd(2023, 1, 3), &mut cache, &source).unwrap();
    let c = get_curve(ymd(2024, 3, 1), &mut cache, &source).unwrap();

    assert_eq!(source.fetches.get(), 2);
    assert_eq!(a.len(), 13);
    assert_eq!(b.date(), ymd(2023, 1, 3));
    // 1.5 Month column is blank that day.
    assert_eq!(c.len(), 13);
    assert!(c.get(TenorKey::from_label("1.5 Month").unwrap()).is_none());

    let cached = cache.table(2023).unwrap().clone();
    get_curve(ymd(2023, 1, 3), &mut cache, &source).unwrap();
    assert_eq!(cache.table(2023).unwrap(), &cached);
    assert_eq!(source.fetches.get(), 2);
}

#[test]
fn test_missing_year_is_load_failure() {
    let source = MemorySource::new();
    let mut cache = YearlyCache::new();

    let err = get_curve(ymd(2020, 6, 1), &mut cache, &source).unwrap_err();
    assert!(matches!(err, ParCurveError::YearLoadFailed { year: 2020, .. }));
    assert!(err.to_string().contains("2020.csv"));
}

#[test]
fn test_compare_across_years() {
    let source = MemorySource::new().with_year(2023, Y2023).with_year(2024, Y2024);
    let mut cache = YearlyCache::new();

    let result = compare_curves(ymd(2024, 3, 1), ymd(2023, 1, 3), &mut cache, &source).unwrap();

    assert_eq!(result.baseline_date, ymd(2023, 1, 3));
    assert_eq!(result.current_date, ymd(2024, 3, 1));
    assert_eq!(result.len(), 13);

    let ten = result.get(TenorKey::from_years(10.0)).unwrap();
    assert_relative_eq!(ten.baseline, 0.0379, epsilon = 1e-12);
    assert_relative_eq!(ten.current, 0.0418, epsilon = 1e-12);
    assert_relative_eq!(ten.absolute_diff_bps, 39.0, epsilon = 1e-6);
}

#[test]
fn test_compare_propagates_loader_errors() {
    let source = MemorySource::new().with_year(2023, Y2023);
    let mut cache = YearlyCache::new();

    let err = compare_curves(ymd(2023, 1, 3), ymd(2023, 1, 7), &mut cache, &source).unwrap_err();
    assert!(matches!(err, ParCurveError::NoDataForDate { date } if date == ymd(2023, 1, 7)));

    let err = compare_curves(ymd(1985, 1, 2), ymd(2023, 1, 3), &mut cache, &source).unwrap_err();
    assert!(matches!(err, ParCurveError::UnsupportedYear { year: 1985, .. }));
}

#[test]
fn test_export_writes_series_and_summary() {
    let archive = "\
Date,1 Mo,3 Mo,1 Yr,30 Yr
01/03/90,,7.89,7.81,8.04
01/02/90,,7.83,7.81,8.00
";
    let source = MemorySource::new().with_archive(archive);
    let dir = tempfile::tempdir().unwrap();
    let settings = ExportSettings::default().with_out_dir(dir.path());

    let report = export_archive(&source, &settings).unwrap();
    assert_eq!(report.rows, 2);
    assert_eq!(report.columns, 4);

    let series = std::fs::read_to_string(&report.series_path).unwrap();
    let lines: Vec<&str> = series.lines().collect();
    assert_eq!(lines[0], "Date,0.0833,0.25,1,30");
    assert_eq!(lines[1], "1990-01-03,,0.0789,0.0781,0.0804");
    assert_eq!(lines[2], "1990-01-02,,0.0783,0.0781,0.08");

    let summary = std::fs::read_to_string(&report.summary_path).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[0], ",0.0833,0.25,1,30");
    assert_eq!(lines[1], "count,0.0,2.0,2.0,2.0");
    assert_eq!(lines[2], "mean,,0.0786,0.0781,0.0802");
    assert_eq!(lines.len(), 9);
    assert!(lines[8].starts_with("max,"));
}

#[test]
fn test_export_without_archive_fails() {
    let source = MemorySource::new();
    let dir = tempfile::tempdir().unwrap();
    let settings = ExportSettings::default().with_out_dir(dir.path());

    let err = export_archive(&source, &settings).unwrap_err();
    assert!(matches!(err, ParCurveError::Export { .. }));
    assert!(!settings.series_path().exists());
}

proptest! {
    #[test]
    fn prop_ingested_values_round_trip_to_percent(
        raw in proptest::collection::vec(0u32..2_000u32, 1..14)
    ) {
        let labels: Vec<String> = TenorKey::all().take(raw.len()).map(|t| t.label()).collect();
        let percents: Vec<f64> = raw.iter().map(|&r| f64::from(r) / 100.0).collect();
        let csv = format!(
            "Date,{}\n06/03/2024,{}\n",
            labels.join(","),
            percents.iter().map(|p| format!("{p:.2}")).collect::<Vec<_>>().join(","),
        );
        let source = MemorySource::new().with_year(2024, &csv);
        let mut cache = YearlyCache::new();

        let curve = get_curve(ymd(2024, 6, 3), &mut cache, &source).unwrap();
        for (label, percent) in labels.iter().zip(&percents) {
            let value = curve.get(TenorKey::from_label(label).unwrap()).unwrap();
            prop_assert!((value * 100.0 - percent).abs() < 1e-6);
        }
    }

    #[test]
    fn prop_comparison_roles_ignore_argument_order(
        base in 1u32..800u32,
        curr in 0u32..800u32,
    ) {
        let csv = format!(
            "Date,2 Yr\n06/04/2024,{:.2}\n06/03/2024,{:.2}\n",
            f64::from(curr) / 100.0,
            f64::from(base) / 100.0,
        );
        let source = MemorySource::new().with_year(2024, &csv);
        let mut cache = YearlyCache::new();

        let forward = compare_curves(ymd(2024, 6, 3), ymd(2024, 6, 4), &mut cache, &source).unwrap();
        let reverse = compare_curves(ymd(2024, 6, 4), ymd(2024, 6, 3), &mut cache, &source).unwrap();

        prop_assert_eq!(forward.baseline_date, reverse.baseline_date);
        prop_assert_eq!(forward.current_date, ymd(2024, 6, 4));
        prop_assert_eq!(forward.tenors[0].absolute_diff_bps, reverse.tenors[0].absolute_diff_bps);
        prop_assert_eq!(forward.tenors[0].baseline, reverse.tenors[0].baseline);
        prop_assert_eq!(source.fetches.get(), 1);
    }
}
