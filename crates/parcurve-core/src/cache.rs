//! Yearly rate cache and curve loader.
//!
//! The cache is owned by the caller and passed by `&mut`; there is no
//! process-wide instance. Each year is fetched at most once per cache and
//! held until the cache is dropped.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info, warn};

use crate::error::{ParCurveError, ParCurveResult};
use crate::ingest::parse_rates_csv;
use crate::source::RateSource;
use crate::types::{DailyCurve, YearlyTable};

/// First year of published par yield curve history.
pub const MIN_SUPPORTED_YEAR: i32 = 1990;

/// In-memory mapping from calendar year to its full table of daily curves.
///
/// Unbounded: one table per requested year, never evicted or refreshed.
#[derive(Debug, Clone)]
pub struct YearlyCache {
    years: HashMap<i32, YearlyTable>,
    min_year: i32,
}

impl Default for YearlyCache {
    fn default() -> Self {
        Self::new()
    }
}

impl YearlyCache {
    /// Creates an empty cache accepting years from 1990 onwards.
    #[must_use]
    pub fn new() -> Self {
        Self::with_min_year(MIN_SUPPORTED_YEAR)
    }

    /// Creates an empty cache with a later earliest accepted year.
    ///
    /// Values before [`MIN_SUPPORTED_YEAR`] are raised to it.
    #[must_use]
    pub fn with_min_year(min_year: i32) -> Self {
        Self {
            years: HashMap::new(),
            min_year: min_year.max(MIN_SUPPORTED_YEAR),
        }
    }

    /// Earliest year the cache will load.
    #[must_use]
    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    /// Returns `true` if the year is already loaded.
    #[must_use]
    pub fn contains_year(&self, year: i32) -> bool {
        self.years.contains_key(&year)
    }

    /// Returns a loaded table without fetching.
    #[must_use]
    pub fn table(&self, year: i32) -> Option<&YearlyTable> {
        self.years.get(&year)
    }

    /// Loaded years in ascending order.
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.years.keys().copied().collect();
        years.sort_unstable();
        years
    }

    /// Number of loaded years.
    #[must_use]
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Returns `true` if nothing has been loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Returns the table for `year`, fetching it from `source` on a miss.
    ///
    /// # Errors
    ///
    /// - [`ParCurveError::UnsupportedYear`] if `year` is before the minimum
    /// - [`ParCurveError::YearLoadFailed`] if fetching or parsing fails; the
    ///   year stays absent so a later call fetches again
    pub fn load_year<S>(&mut self, year: i32, source: &S) -> ParCurveResult<&YearlyTable>
    where
        S: RateSource + ?Sized,
    {
        if year < self.min_year {
            return Err(ParCurveError::UnsupportedYear {
                year,
                min_year: self.min_year,
            });
        }

        match self.years.entry(year) {
            Entry::Occupied(entry) => {
                debug!(year, "Serving year from cache");
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                info!("Loading data for year {} into cache...", year);
                let table = fetch_table(year, source)?;
                if table.is_empty() {
                    warn!(year, "Source returned no rows");
                }
                info!("Successfully loaded and cached data for {}.", year);
                Ok(entry.insert(table))
            }
        }
    }

    /// Returns the curve for an exact date, loading its year if needed.
    ///
    /// # Errors
    ///
    /// As [`YearlyCache::load_year`], plus [`ParCurveError::NoDataForDate`]
    /// when the year has no row for `date`. Adjacent days are never
    /// substituted.
    pub fn get_curve<S>(&mut self, date: NaiveDate, source: &S) -> ParCurveResult<DailyCurve>
    where
        S: RateSource + ?Sized,
    {
        let table = self.load_year(date.year(), source)?;
        table
            .get(date)
            .cloned()
            .ok_or(ParCurveError::NoDataForDate { date })
    }
}

/// Returns the curve for `date` from `cache`, fetching its year from
/// `source` on a miss.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use parcurve_core::prelude::*;
///
/// struct Empty;
///
/// impl RateSource for Empty {
///     fn fetch_year(&self, _year: i32) -> Result<String, SourceError> {
///         Ok("Date,1 Yr\n".to_string())
///     }
///     fn fetch_archive(&self) -> Result<String, SourceError> {
///         Ok("Date,1 Yr\n".to_string())
///     }
/// }
///
/// let mut cache = YearlyCache::new();
/// let too_early = NaiveDate::from_ymd_opt(1989, 12, 29).unwrap();
/// assert!(matches!(
///     get_curve(too_early, &mut cache, &Empty),
///     Err(ParCurveError::UnsupportedYear { year: 1989, .. })
/// ));
/// ```
pub fn get_curve<S>(
    date: NaiveDate,
    cache: &mut YearlyCache,
    source: &S,
) -> ParCurveResult<DailyCurve>
where
    S: RateSource + ?Sized,
{
    cache.get_curve(date, source)
}

fn fetch_table<S>(year: i32, source: &S) -> ParCurveResult<YearlyTable>
where
    S: RateSource + ?Sized,
{
    let text = source
        .fetch_year(year)
        .map_err(|e| ParCurveError::year_load_failed(year, e))?;
    let parsed = parse_rates_csv(&text).map_err(|e| ParCurveError::year_load_failed(year, e))?;
    Ok(YearlyTable::new(year, parsed.curves))
}
