//! Export command implementation.
//!
//! Downloads the full historical archive and writes the decimal series and
//! its summary statistics.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use parcurve_core::{export_archive, RateSource};
use parcurve_ext_treasury::ParCurveConfig;

use crate::cli::OutputFormat;
use crate::output::{print_json, print_output, print_success, KeyValue};

/// Arguments for the export command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output directory (defaults to the configured one, else the current directory)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

/// Execute the export command.
pub fn execute(
    args: ExportArgs,
    format: OutputFormat,
    config: &ParCurveConfig,
    source: &dyn RateSource,
) -> Result<()> {
    let mut settings = config.export.clone();
    if let Some(dir) = args.out_dir {
        settings = settings.with_out_dir(dir);
    }

    let report = export_archive(source, &settings)?;

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Table | OutputFormat::Csv => {
            if format == OutputFormat::Table {
                print_success("Export complete");
            }
            let rows = vec![
                KeyValue::new("Series", report.series_path.display().to_string()),
                KeyValue::new("Summary", report.summary_path.display().to_string()),
                KeyValue::new("Rows", report.rows.to_string()),
                KeyValue::new("Tenors", report.columns.to_string()),
            ];
            print_output(&rows, format)?;
        }
    }

    Ok(())
}
