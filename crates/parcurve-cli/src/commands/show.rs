//! Show command implementation.
//!
//! Looks up and displays one day's par yield curve.

use anyhow::Result;
use clap::Args;
use colored::Color;
use serde::Serialize;
use tabled::Tabled;

use parcurve_core::{get_curve, DailyCurve, RateSource, YearlyCache};

use crate::cli::OutputFormat;
use crate::commands::resolve_date;
use crate::output::{print_header, print_json, print_output, print_warning};
use crate::plot::{line_chart, Series, CHART_HEIGHT, CHART_WIDTH};

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Date (YYYY/MM/DD). Prompted for when omitted.
    pub date: Option<String>,

    /// Draw the curve as a chart
    #[arg(short, long)]
    pub plot: bool,
}

/// One tenor of the displayed curve.
#[derive(Debug, Serialize, Tabled)]
struct CurvePoint {
    #[tabled(rename = "Tenor")]
    label: String,
    #[tabled(rename = "Years")]
    years: f64,
    #[tabled(skip)]
    #[serde(rename = "yield")]
    value: f64,
    #[tabled(rename = "Yield (%)")]
    #[serde(skip)]
    percent: String,
}

/// Execute the show command.
pub fn execute(
    args: ShowArgs,
    format: OutputFormat,
    cache: &mut YearlyCache,
    source: &dyn RateSource,
) -> Result<()> {
    let date = resolve_date(args.date.as_deref(), "Input Valid date (%Y/%m/%d): ")?;
    let curve = get_curve(date, cache, source)?;

    let points: Vec<CurvePoint> = curve
        .points()
        .map(|(tenor, value)| CurvePoint {
            label: tenor.label(),
            years: tenor.years(),
            value,
            percent: format!("{:.2}", value * 100.0),
        })
        .collect();

    match format {
        OutputFormat::Table => {
            print_header(&format!("Par Yield Curve: {date}"));
            print_output(&points, format)?;
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "date": date,
            "points": points,
        }))?,
        OutputFormat::Csv => print_output(&points, format)?,
    }

    if args.plot {
        if format == OutputFormat::Table {
            println!();
            print!("{}", curve_chart(&curve));
        } else {
            print_warning("--plot is only drawn with table output");
        }
    }

    Ok(())
}

/// Line chart of one curve.
fn curve_chart(curve: &DailyCurve) -> String {
    let label = curve.date().format("%Y-%m-%d").to_string();
    let series = Series::new(
        format!("Yield Curve: {label}"),
        curve.points().map(|(t, v)| (t.years(), v)).collect(),
        'o',
        Color::Cyan,
    );
    line_chart(
        &format!("Yield Curve for {label}"),
        &[series],
        CHART_WIDTH,
        CHART_HEIGHT,
    )
}
