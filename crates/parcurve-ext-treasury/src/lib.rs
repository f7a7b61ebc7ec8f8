//! # Parcurve Ext Treasury
//!
//! Rate sources for the parcurve cache and exporter:
//! - HTTP source against the U.S. Treasury CSV endpoints
//! - Directory source reading the same CSV layout from disk
//!
//! plus the TOML configuration that selects between them.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod directory;
mod http;

pub use config::*;
pub use directory::*;
pub use http::*;

use parcurve_core::{RateSource, SourceError};
use tracing::info;

/// Create the rate source selected by `config`.
///
/// A configured `data_dir` wins over the network.
pub fn create_source(config: &ParCurveConfig) -> Result<Box<dyn RateSource>, SourceError> {
    match &config.data_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "Using local rate files");
            Ok(Box::new(DirectorySource::new(dir)))
        }
        None => Ok(Box::new(TreasuryHttpSource::new(config.endpoints.clone())?)),
    }
}
