//! Parsing of the Treasury par yield curve CSV layout.
//!
//! Both the yearly endpoint and the historical archive publish a `Date`
//! column followed by one column per tenor label, with yields in percent:
//!
//! ```text
//! Date,1 Mo,2 Mo,3 Mo,6 Mo,1 Yr,2 Yr,3 Yr,5 Yr,7 Yr,10 Yr,20 Yr,30 Yr
//! 12/29/2023,5.60,5.59,5.40,5.26,4.79,4.23,4.01,3.84,3.88,3.88,4.20,4.03
//! ```
//!
//! Parsing renames columns through the tenor mapping and divides every
//! value by 100.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::ParseError;
use crate::tenor::TenorKey;
use crate::types::DailyCurve;

/// Percent to decimal conversion factor.
const PERCENT: f64 = 100.0;

/// Parsed CSV contents.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRates {
    /// Tenor columns in header order. Unknown labels are dropped.
    pub tenors: Vec<TenorKey>,
    /// One curve per data row, in file order.
    pub curves: Vec<DailyCurve>,
}

/// Parses Treasury CSV text into decimal-yield curves.
///
/// Blank and `N/A` cells are omitted from the row's curve.
///
/// # Example
///
/// ```rust
/// use parcurve_core::ingest::parse_rates_csv;
/// use parcurve_core::TenorKey;
///
/// let parsed = parse_rates_csv("Date,3 Mo,10 Yr\n01/02/90,7.83,7.94\n").unwrap();
/// let curve = &parsed.curves[0];
/// assert_eq!(curve.date().to_string(), "1990-01-02");
/// assert!((curve.get(TenorKey::from_years(10.0)).unwrap() - 0.0794).abs() < 1e-12);
/// ```
pub fn parse_rates_csv(text: &str) -> Result<ParsedRates, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.trim_start_matches('\u{feff}').as_bytes());

    let headers = reader.headers()?.clone();
    let date_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("date"))
        .ok_or(ParseError::MissingDateColumn)?;

    let mut columns = Vec::new();
    for (idx, label) in headers.iter().enumerate() {
        if idx == date_idx {
            continue;
        }
        match TenorKey::from_label(label) {
            Some(key) => columns.push((idx, label.to_string(), key)),
            None => debug!(column = label, "Skipping unmapped column"),
        }
    }

    let mut curves = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);

        let raw_date = record.get(date_idx).unwrap_or_default();
        let date = parse_date(raw_date).ok_or_else(|| ParseError::InvalidDate {
            line,
            value: raw_date.to_string(),
        })?;

        let mut yields = Vec::with_capacity(columns.len());
        for (idx, label, key) in &columns {
            let cell = record.get(*idx).unwrap_or_default();
            if cell.is_empty() || cell.eq_ignore_ascii_case("n/a") {
                continue;
            }
            let percent: f64 = cell.parse().map_err(|_| ParseError::InvalidValue {
                line,
                column: label.clone(),
                value: cell.to_string(),
            })?;
            yields.push((*key, percent / PERCENT));
        }

        curves.push(DailyCurve::new(date, yields));
    }

    Ok(ParsedRates {
        tenors: columns.into_iter().map(|(_, _, key)| key).collect(),
        curves,
    })
}

/// Parses the date formats the Treasury publishes.
///
/// `MM/DD/YYYY` (yearly endpoint), `MM/DD/YY` (archive; 70-99 map to the
/// 1900s, 00-69 to the 2000s) and ISO `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.contains('/') {
        let two_digit_year = s.rsplit('/').next().is_some_and(|y| y.len() == 2);
        let format = if two_digit_year { "%m/%d/%y" } else { "%m/%d/%Y" };
        NaiveDate::parse_from_str(s, format).ok()
    } else {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const YEARLY: &str = "\
Date,1 Mo,2 Mo,3 Mo,4 Mo,6 Mo,1 Yr,2 Yr,3 Yr,5 Yr,7 Yr,10 Yr,20 Yr,30 Yr
12/29/2023,5.60,5.59,5.40,5.41,5.26,4.79,4.23,4.01,3.84,3.88,3.88,4.20,4.03
12/28/2023,5.57,5.55,5.45,5.44,5.28,4.82,4.26,4.02,3.83,3.84,3.84,4.14,3.98
";

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_yearly_layout() {
        let parsed = parse_rates_csv(YEARLY).unwrap();
        assert_eq!(parsed.tenors.len(), 13);
        assert_eq!(parsed.curves.len(), 2);

        let curve = &parsed.curves[0];
        assert_eq!(curve.date(), ymd(2023, 12, 29));
        assert_relative_eq!(
            curve.get(TenorKey::from_label("1 Mo").unwrap()).unwrap(),
            0.056,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            curve.get(TenorKey::from_label("30 Yr").unwrap()).unwrap(),
            0.0403,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_blank_cells_are_omitted() {
        let text = "Date,1 Mo,20 Yr,30 Yr\n01/02/1990,,,8.00\n";
        let parsed = parse_rates_csv(text).unwrap();
        let curve = &parsed.curves[0];
        assert_eq!(curve.len(), 1);
        assert!(curve.get(TenorKey::from_years(20.0)).is_none());
    }

    #[test]
    fn test_unknown_columns_are_skipped() {
        let text = "Date,1 Yr,Extrapolation Factor\n03/01/2024,5.00,1.2\n";
        let parsed = parse_rates_csv(text).unwrap();
        assert_eq!(parsed.tenors, vec![TenorKey::from_years(1.0)]);
        assert_eq!(parsed.curves[0].len(), 1);
    }

    #[test]
    fn test_missing_date_column() {
        let err = parse_rates_csv("Day,1 Yr\n03/01/2024,5.00\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingDateColumn));
    }

    #[test]
    fn test_invalid_value_reports_line() {
        let err = parse_rates_csv("Date,1 Yr\n03/01/2024,5.00\n03/04/2024,abc\n").unwrap_err();
        match err {
            ParseError::InvalidValue { line, column, value } => {
                assert_eq!(line, 3);
                assert_eq!(column, "1 Yr");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_date() {
        let err = parse_rates_csv("Date,1 Yr\n2024/13/01,5.00\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidDate { .. }));
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(parse_date("01/02/90"), Some(ymd(1990, 1, 2)));
        assert_eq!(parse_date("12/30/22"), Some(ymd(2022, 12, 30)));
        assert_eq!(parse_date("03/01/2024"), Some(ymd(2024, 3, 1)));
        assert_eq!(parse_date("2024-03-01"), Some(ymd(2024, 3, 1)));
        assert_eq!(parse_date("March 1"), None);
    }

    #[test]
    fn test_byte_order_mark() {
        let parsed = parse_rates_csv("\u{feff}Date,1 Yr\n03/01/2024,5.00\n").unwrap();
        assert_eq!(parsed.curves.len(), 1);
    }
}
