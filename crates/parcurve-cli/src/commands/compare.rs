//! Compare command implementation.
//!
//! Shows how the curve moved between two dates.

use anyhow::Result;
use clap::Args;
use colored::Color;

use parcurve_core::{compare_curves, ComparisonResult, RateSource, TenorComparison, YearlyCache};

use crate::cli::OutputFormat;
use crate::commands::resolve_date;
use crate::output::{fmt2, grid_table, print_header, print_json, print_warning};
use crate::plot::{bar_chart, line_chart, Series, CHART_HEIGHT, CHART_WIDTH};

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First date (YYYY/MM/DD). Prompted for when omitted.
    pub date_a: Option<String>,

    /// Second date (YYYY/MM/DD). Prompted for when omitted.
    pub date_b: Option<String>,

    /// Draw both curves and the per-tenor change
    #[arg(short, long)]
    pub plot: bool,
}

/// Execute the compare command.
pub fn execute(
    args: CompareArgs,
    format: OutputFormat,
    cache: &mut YearlyCache,
    source: &dyn RateSource,
) -> Result<()> {
    let date_a = resolve_date(args.date_a.as_deref(), "Input first date (%Y/%m/%d): ")?;
    let date_b = resolve_date(args.date_b.as_deref(), "Input second date (%Y/%m/%d): ")?;

    let result = compare_curves(date_a, date_b, cache, source)?;

    match format {
        OutputFormat::Table => {
            print_header(&format!(
                "Yield Curve Comparison: {} (baseline) vs {} (current)",
                result.baseline_date, result.current_date
            ));
            println!("{}", comparison_table(&result));
        }
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in result.iter() {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }

    if args.plot {
        if format == OutputFormat::Table {
            println!();
            print!("{}", overlay_chart(&result));
            println!();
            print!("{}", change_chart(&result));
        } else {
            print_warning("--plot is only drawn with table output");
        }
    }

    Ok(())
}

/// Rows: baseline %, current %, change in bps, relative change %.
/// Columns: tenor labels.
fn comparison_table(result: &ComparisonResult) -> String {
    let mut header = vec![String::new()];
    header.extend(result.iter().map(|t| t.label.clone()));

    let rows = vec![
        table_row(format!("{} Yield (%)", result.baseline_date), result, |t| {
            t.baseline * 100.0
        }),
        table_row(format!("{} Yield (%)", result.current_date), result, |t| {
            t.current * 100.0
        }),
        table_row("Abs Diff (bps)".to_string(), result, |t| t.absolute_diff_bps),
        table_row("Rel Diff (%)".to_string(), result, |t| t.relative_diff_pct),
    ];

    grid_table(header, rows)
}

fn table_row(
    name: String,
    result: &ComparisonResult,
    value: impl Fn(&TenorComparison) -> f64,
) -> Vec<String> {
    let mut cells = vec![name];
    cells.extend(result.iter().map(|t| fmt2(value(t))));
    cells
}

fn overlay_chart(result: &ComparisonResult) -> String {
    let baseline = Series::new(
        format!("Yield Curve: {}", result.baseline_date),
        result.iter().map(|t| (t.tenor.years(), t.baseline)).collect(),
        'o',
        Color::Blue,
    );
    let current = Series::new(
        format!("Yield Curve: {}", result.current_date),
        result.iter().map(|t| (t.tenor.years(), t.current)).collect(),
        'x',
        Color::Red,
    );
    line_chart(
        &format!(
            "Yield Curves: {} vs {}",
            result.baseline_date, result.current_date
        ),
        &[baseline, current],
        CHART_WIDTH,
        CHART_HEIGHT,
    )
}

fn change_chart(result: &ComparisonResult) -> String {
    let bars: Vec<(String, f64)> = result
        .iter()
        .map(|t| (t.label.clone(), t.absolute_diff_bps))
        .collect();
    bar_chart("Absolute Difference (bps) by Tenor", &bars, CHART_WIDTH)
}
