//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CompareArgs, ExportArgs, ShowArgs};

/// Parcurve - U.S. Treasury par yield curves by date
#[derive(Parser)]
#[command(name = "parcurve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress progress messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "PARCURVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Read yearly CSVs from this directory instead of the Treasury website
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the par yield curve for one date
    Show(ShowArgs),

    /// Compare the curves of two dates
    Compare(CompareArgs),

    /// Export the full 1990-2022 archive and its summary statistics
    Export(ExportArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
