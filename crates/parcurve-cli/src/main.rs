//! Parcurve CLI - U.S. Treasury par yield curve lookup and comparison.
//!
//! # Usage
//!
//! ```bash
//! # Show one day's curve (prompts for the date when omitted)
//! parcurve show 2024/03/01 --plot
//!
//! # Compare two days; the later date is always "current"
//! parcurve compare 2023/01/03 2024/03/01 --plot
//!
//! # Export the 1990-2022 archive and its summary statistics
//! parcurve export --out-dir ./out
//!
//! # Work offline from a directory of yearly CSVs
//! parcurve --data-dir ./rates show 2022-12-30
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use parcurve_core::YearlyCache;
use parcurve_ext_treasury::{create_source, ParCurveConfig};

mod cli;
mod commands;
mod error;
mod output;
mod plot;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.quiet);

    let config = load_config(&cli)?;
    let source = create_source(&config).context("Cannot create rate source")?;

    // One cache per process; every lookup below shares it.
    let mut cache = YearlyCache::with_min_year(config.min_year);

    let format = cli.format;
    match cli.command {
        Commands::Show(args) => commands::show::execute(args, format, &mut cache, source.as_ref())?,
        Commands::Compare(args) => {
            commands::compare::execute(args, format, &mut cache, source.as_ref())?;
        }
        Commands::Export(args) => commands::export::execute(args, format, &config, source.as_ref())?,
    }

    Ok(())
}

fn init_tracing(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn load_config(cli: &Cli) -> Result<ParCurveConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            ParCurveConfig::from_file(path)?
        }
        None => ParCurveConfig::default(),
    };

    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }

    Ok(config)
}
