//! Error types for parcurve.
//!
//! [`ParCurveError`] is the taxonomy surfaced to callers. [`SourceError`]
//! and [`ParseError`] describe the two ways loading a year can go wrong and
//! are folded into [`ParCurveError::YearLoadFailed`] by the cache.

use chrono::NaiveDate;
use thiserror::Error;

/// A specialized Result type for parcurve operations.
pub type ParCurveResult<T> = Result<T, ParCurveError>;

/// The main error type for curve lookup, comparison and export.
#[derive(Error, Debug)]
pub enum ParCurveError {
    /// The requested year predates the published history.
    #[error("Data is not available before {min_year}. Requested year: {year}")]
    UnsupportedYear {
        /// Requested year.
        year: i32,
        /// Earliest year the loader accepts.
        min_year: i32,
    },

    /// Fetching or parsing a year's rates failed.
    #[error("Could not load data for year {year}. Error: {message}")]
    YearLoadFailed {
        /// Year that failed to load.
        year: i32,
        /// Underlying failure.
        message: String,
    },

    /// The loaded year has no row for the date (weekend, holiday, future date).
    #[error("No yield curve data found for date: {date}")]
    NoDataForDate {
        /// Requested date.
        date: NaiveDate,
    },

    /// Two curves share no tenor.
    #[error("No common tenors between {baseline} and {current}")]
    NoCommonTenors {
        /// Earlier date.
        baseline: NaiveDate,
        /// Later date.
        current: NaiveDate,
    },

    /// The bulk export could not be produced.
    #[error("Export failed: {message}")]
    Export {
        /// Description of the failure.
        message: String,
    },

    /// Filesystem error while writing export files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParCurveError {
    /// Creates a year load failure from any displayable cause.
    #[must_use]
    pub fn year_load_failed(year: i32, cause: impl std::fmt::Display) -> Self {
        Self::YearLoadFailed {
            year,
            message: cause.to_string(),
        }
    }

    /// Creates an export error.
    #[must_use]
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }
}

/// Failure to obtain raw CSV text from a [`crate::RateSource`].
#[derive(Error, Debug)]
pub enum SourceError {
    /// Transport or HTTP status failure.
    #[error("HTTP error fetching {url}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// Transport error or status line.
        message: String,
    },

    /// Local read failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source has nothing for the request.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Failure to interpret Treasury CSV text.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Malformed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row lacks a `Date` column.
    #[error("Missing 'Date' column in header")]
    MissingDateColumn,

    /// Date cell in an unrecognised format.
    #[error("Invalid date '{value}' on line {line}")]
    InvalidDate {
        /// 1-based line number.
        line: u64,
        /// Offending cell.
        value: String,
    },

    /// Rate cell that is not a number.
    #[error("Invalid value '{value}' in column '{column}' on line {line}")]
    InvalidValue {
        /// 1-based line number.
        line: u64,
        /// Column label.
        column: String,
        /// Offending cell.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_fields() {
        let err = ParCurveError::UnsupportedYear {
            year: 1985,
            min_year: 1990,
        };
        assert_eq!(
            err.to_string(),
            "Data is not available before 1990. Requested year: 1985"
        );

        let date = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let err = ParCurveError::NoDataForDate { date };
        assert_eq!(err.to_string(), "No yield curve data found for date: 2024-03-02");
    }

    #[test]
    fn test_year_load_failed_wraps_cause() {
        let cause = SourceError::NotFound("2024.csv".into());
        let err = ParCurveError::year_load_failed(2024, cause);
        match err {
            ParCurveError::YearLoadFailed { year, message } => {
                assert_eq!(year, 2024);
                assert!(message.contains("2024.csv"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
