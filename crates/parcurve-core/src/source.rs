//! Raw rate source abstraction.
//!
//! The cache and the exporter only need CSV text; where it comes from
//! (HTTP, a local directory, a test fixture) is the source's concern.

use crate::error::SourceError;

/// Supplier of raw Treasury par yield CSV text.
///
/// Implementations are blocking. Each call is one fetch; callers decide
/// whether to keep the result.
pub trait RateSource {
    /// Returns the CSV for every business day of `year`.
    fn fetch_year(&self, year: i32) -> Result<String, SourceError>;

    /// Returns the CSV for the full historical archive.
    fn fetch_archive(&self) -> Result<String, SourceError>;
}

impl<S: RateSource + ?Sized> RateSource for &S {
    fn fetch_year(&self, year: i32) -> Result<String, SourceError> {
        (**self).fetch_year(year)
    }

    fn fetch_archive(&self) -> Result<String, SourceError> {
        (**self).fetch_archive()
    }
}

impl<S: RateSource + ?Sized> RateSource for Box<S> {
    fn fetch_year(&self, year: i32) -> Result<String, SourceError> {
        (**self).fetch_year(year)
    }

    fn fetch_archive(&self) -> Result<String, SourceError> {
        (**self).fetch_archive()
    }
}
