//! # Parcurve Core
//!
//! Lookup, comparison and export of U.S. Treasury daily par yield curves.
//!
//! This crate provides the building blocks used by the `parcurve` tools:
//!
//! - **Tenors**: the static mapping between Treasury column labels
//!   (`"1 Mo"`, `"10 Yr"`) and numeric tenor keys in years
//! - **Types**: [`DailyCurve`] and [`YearlyTable`], yields stored as decimal fractions
//! - **Ingestion**: parsing of the Treasury CSV layout
//! - **Cache**: a caller-owned [`YearlyCache`] that fetches each year at most once
//! - **Comparison**: basis-point and relative differences between two dates
//! - **Export**: the full-archive batch job and its summary statistics
//!
//! Network access sits behind the [`RateSource`] trait; concrete sources
//! live in `parcurve-ext-treasury`.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use parcurve_core::prelude::*;
//!
//! struct Fixed;
//!
//! impl RateSource for Fixed {
//!     fn fetch_year(&self, _year: i32) -> Result<String, SourceError> {
//!         Ok("Date,1 Yr,10 Yr\n03/01/2024,5.00,4.50\n".to_string())
//!     }
//!
//!     fn fetch_archive(&self) -> Result<String, SourceError> {
//!         Err(SourceError::NotFound("archive".into()))
//!     }
//! }
//!
//! let mut cache = YearlyCache::new();
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let curve = cache.get_curve(date, &Fixed).unwrap();
//! assert_eq!(curve.get(TenorKey::from_years(10.0)), Some(0.045));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod cache;
pub mod compare;
pub mod error;
pub mod export;
pub mod ingest;
pub mod source;
pub mod stats;
pub mod tenor;
pub mod types;

pub use cache::{get_curve, YearlyCache, MIN_SUPPORTED_YEAR};
pub use compare::{compare_curves, compare_daily_curves, ComparisonResult, TenorComparison};
pub use error::{ParCurveError, ParCurveResult, ParseError, SourceError};
pub use export::{export_archive, ExportReport, ExportSettings};
pub use source::RateSource;
pub use stats::SummaryStatistics;
pub use tenor::TenorKey;
pub use types::{DailyCurve, YearlyTable};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cache::{get_curve, YearlyCache};
    pub use crate::compare::{compare_curves, ComparisonResult};
    pub use crate::error::{ParCurveError, ParCurveResult, SourceError};
    pub use crate::source::RateSource;
    pub use crate::tenor::TenorKey;
    pub use crate::types::{DailyCurve, YearlyTable};
}
