//! Full-archive bulk export.
//!
//! One fetch of the historical archive, rescaled to decimals, written as a
//! flat series file and a descriptive statistics file. Nothing is cached.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ParCurveError, ParCurveResult};
use crate::ingest::{parse_rates_csv, ParsedRates};
use crate::source::RateSource;
use crate::stats::{describe, SUMMARY_ROWS};

/// Decimal places written to both output files.
const DECIMALS: usize = 6;

/// Where and under which names the export files are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Output directory.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// File name for the decimal series.
    #[serde(default = "default_series_file")]
    pub series_file: String,

    /// File name for the summary statistics.
    #[serde(default = "default_summary_file")]
    pub summary_file: String,
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_series_file() -> String {
    "daily_yield_curves_1990-2022.csv".to_string()
}

fn default_summary_file() -> String {
    "daily_yield_curves_1990-2022_summary.csv".to_string()
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            series_file: default_series_file(),
            summary_file: default_summary_file(),
        }
    }
}

impl ExportSettings {
    /// Sets the output directory.
    #[must_use]
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Full path of the series file.
    #[must_use]
    pub fn series_path(&self) -> PathBuf {
        self.out_dir.join(&self.series_file)
    }

    /// Full path of the summary file.
    #[must_use]
    pub fn summary_path(&self) -> PathBuf {
        self.out_dir.join(&self.summary_file)
    }
}

/// What an export produced.
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    /// Series file written.
    pub series_path: PathBuf,
    /// Summary file written.
    pub summary_path: PathBuf,
    /// Data rows in the series file.
    pub rows: usize,
    /// Tenor columns in both files.
    pub columns: usize,
}

/// Fetches the full archive from `source` and writes both export files.
///
/// # Errors
///
/// [`ParCurveError::Export`] if the archive cannot be fetched or parsed,
/// [`ParCurveError::Io`] if a file cannot be written.
pub fn export_archive<S>(source: &S, settings: &ExportSettings) -> ParCurveResult<ExportReport>
where
    S: RateSource + ?Sized,
{
    info!("Downloading full par yield curve archive...");
    let text = source
        .fetch_archive()
        .map_err(|e| ParCurveError::export(e.to_string()))?;
    let parsed = parse_rates_csv(&text).map_err(|e| ParCurveError::export(e.to_string()))?;
    info!(
        rows = parsed.curves.len(),
        columns = parsed.tenors.len(),
        "Archive parsed"
    );

    let series_path = settings.series_path();
    let summary_path = settings.summary_path();
    write_series(&series_path, &parsed)?;
    write_summary(&summary_path, &parsed)?;
    info!(
        series = %series_path.display(),
        summary = %summary_path.display(),
        "Export written"
    );

    Ok(ExportReport {
        series_path,
        summary_path,
        rows: parsed.curves.len(),
        columns: parsed.tenors.len(),
    })
}

/// Writes `Date,<tenor>...` with one row per day in source order.
fn write_series(path: &Path, parsed: &ParsedRates) -> ParCurveResult<()> {
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;

    let mut header = vec!["Date".to_string()];
    header.extend(parsed.tenors.iter().map(ToString::to_string));
    writer.write_record(&header).map_err(csv_error)?;

    for curve in &parsed.curves {
        let mut row = Vec::with_capacity(header.len());
        row.push(curve.date().format("%Y-%m-%d").to_string());
        row.extend(
            parsed
                .tenors
                .iter()
                .map(|&t| curve.get(t).map(format_rounded).unwrap_or_default()),
        );
        writer.write_record(&row).map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes one row per statistic, one column per tenor.
fn write_summary(path: &Path, parsed: &ParsedRates) -> ParCurveResult<()> {
    let summary = describe(&parsed.tenors, &parsed.curves);
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;

    let mut header = vec![String::new()];
    header.extend(parsed.tenors.iter().map(ToString::to_string));
    writer.write_record(&header).map_err(csv_error)?;

    let columns: Vec<[f64; 8]> = summary.iter().map(|s| s.row_values()).collect();
    for (idx, label) in SUMMARY_ROWS.iter().enumerate() {
        let mut row = vec![(*label).to_string()];
        row.extend(columns.iter().map(|values| format_rounded(values[idx])));
        writer.write_record(&row).map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}

/// Rounds to six decimals and drops trailing zeros; NaN is blank.
fn format_rounded(value: f64) -> String {
    if value.is_nan() {
        return String::new();
    }
    let fixed = format!("{:.*}", DECIMALS, value);
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

fn csv_error(err: csv::Error) -> ParCurveError {
    ParCurveError::export(err.to_string())
}
