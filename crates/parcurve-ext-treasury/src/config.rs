//! Parcurve configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use parcurve_core::{ExportSettings, MIN_SUPPORTED_YEAR};

/// Placeholder replaced by the requested year in [`EndpointConfig::yearly_url_template`].
pub const YEAR_PLACEHOLDER: &str = "{year}";

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Cannot read config {path}: {source}")]
    Io {
        /// Config path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`ParCurveConfig`].
    #[error("Invalid config {path}: {source}")]
    Parse {
        /// Config path.
        path: PathBuf,
        /// Underlying error.
        source: toml::de::Error,
    },
}

/// Top-level configuration.
///
/// Every field has a default, so an empty file (or no file) is valid:
///
/// ```toml
/// min_year = 1990
/// data_dir = "./rates"
///
/// [endpoints]
/// user_agent = "parcurve/0.1"
///
/// [export]
/// out_dir = "./out"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParCurveConfig {
    /// Remote endpoints.
    #[serde(default)]
    pub endpoints: EndpointConfig,

    /// Earliest year the curve loader accepts. Never below 1990.
    #[serde(default = "default_min_year")]
    pub min_year: i32,

    /// Read rates from this directory instead of the network.
    pub data_dir: Option<PathBuf>,

    /// Bulk export output.
    #[serde(default)]
    pub export: ExportSettings,
}

fn default_min_year() -> i32 {
    MIN_SUPPORTED_YEAR
}

impl Default for ParCurveConfig {
    fn default() -> Self {
        Self {
            endpoints: EndpointConfig::default(),
            min_year: default_min_year(),
            data_dir: None,
            export: ExportSettings::default(),
        }
    }
}

impl ParCurveConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Treasury endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Yearly CSV URL; `{year}` is substituted.
    #[serde(default = "default_yearly_url_template")]
    pub yearly_url_template: String,

    /// Full-history archive CSV URL.
    #[serde(default = "default_archive_url")]
    pub archive_url: String,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_yearly_url_template() -> String {
    "https://home.treasury.gov/resource-center/data-chart-center/interest-rates/daily-treasury-rates.csv/{year}/all?type=daily_treasury_yield_curve&field_tdr_date_value={year}&page&_format=csv".to_string()
}

fn default_archive_url() -> String {
    "https://home.treasury.gov/resource-center/data-chart-center/interest-rates/daily-treasury-rate-archives/par-yield-curve-rates-1990-2022.csv".to_string()
}

fn default_user_agent() -> String {
    concat!("parcurve/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            yearly_url_template: default_yearly_url_template(),
            archive_url: default_archive_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl EndpointConfig {
    /// URL of the CSV for `year`.
    #[must_use]
    pub fn yearly_url(&self, year: i32) -> String {
        self.yearly_url_template
            .replace(YEAR_PLACEHOLDER, &year.to_string())
    }
}
