//! Local directory source for offline use and EOD snapshots.

use std::path::{Path, PathBuf};

use tracing::debug;

use parcurve_core::{RateSource, SourceError};

/// Default archive file name inside a data directory.
pub const ARCHIVE_FILE: &str = "par-yield-curve-rates-1990-2022.csv";

/// Reads `<dir>/<year>.csv` and `<dir>/par-yield-curve-rates-1990-2022.csv`.
///
/// Files use the same layout as the Treasury downloads.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    archive_file: String,
}

impl DirectorySource {
    /// Creates a source rooted at `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            archive_file: ARCHIVE_FILE.to_string(),
        }
    }

    /// Uses a different archive file name.
    #[must_use]
    pub fn with_archive_file(mut self, name: impl Into<String>) -> Self {
        self.archive_file = name.into();
        self
    }

    /// Path read for `year`.
    #[must_use]
    pub fn year_path(&self, year: i32) -> PathBuf {
        self.dir.join(format!("{year}.csv"))
    }

    /// Path read for the archive.
    #[must_use]
    pub fn archive_path(&self) -> PathBuf {
        self.dir.join(&self.archive_file)
    }

    fn read(path: &Path) -> Result<String, SourceError> {
        if !path.exists() {
            return Err(SourceError::NotFound(path.display().to_string()));
        }
        debug!(path = %path.display(), "Reading rates file");
        Ok(std::fs::read_to_string(path)?)
    }
}

impl RateSource for DirectorySource {
    fn fetch_year(&self, year: i32) -> Result<String, SourceError> {
        Self::read(&self.year_path(year))
    }

    fn fetch_archive(&self) -> Result<String, SourceError> {
        Self::read(&self.archive_path())
    }
}
