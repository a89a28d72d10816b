//! Multi-file instrument aggregation.
//!
//! Discovers every ICARTT file of one instrument, reads them in path order
//! and stacks them into a single DataFrame, optionally dropping rows whose
//! subset columns are all missing.

pub mod discovery;

#[cfg(test)]
pub mod tests;

use self::discovery::FileDiscovery;

use crate::config::IctConfig;
use crate::error::{IctError, Result};
use crate::reader::IctReader;

use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reader that merges all files of one instrument
#[derive(Debug, Clone)]
pub struct InstrumentReader {
    file_discovery: FileDiscovery,
    reader: IctReader,
    subset: Option<Vec<String>>,
}

impl Default for InstrumentReader {
    fn default() -> Self {
        Self::new(IctConfig::default())
    }
}

impl InstrumentReader {
    /// Create an instrument reader searching `config.input_directory`
    pub fn new(config: IctConfig) -> Self {
        Self {
            file_discovery: FileDiscovery::new(config.input_directory.clone()),
            reader: IctReader::new(config),
            subset: None,
        }
    }

    /// Search a different directory
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.file_discovery = FileDiscovery::new(directory);
        self
    }

    /// Drop rows where every listed column is missing
    pub fn with_subset<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subset = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn directory(&self) -> &Path {
        self.file_discovery.directory()
    }

    /// Paths that `read_instrument(code)` would read, in read order
    pub fn discover(&self, code: &str) -> Result<Vec<PathBuf>> {
        self.file_discovery.discover_instrument_files(code)
    }

    /// Read and merge every file of the instrument `code`
    pub fn read_instrument(&self, code: &str) -> Result<DataFrame> {
        let files = self.discover(code)?;
        let frame = self.read_paths(&files)?;

        info!(
            "Merged {} files for instrument '{}' into {} rows",
            files.len(),
            code,
            frame.height()
        );

        Ok(frame)
    }

    /// Read `files` in the given order, concatenate and filter
    pub fn read_paths(&self, files: &[PathBuf]) -> Result<DataFrame> {
        if files.is_empty() {
            return Err(IctError::NoMatchingFiles {
                pattern: self.directory().display().to_string(),
            });
        }

        let frames = files
            .iter()
            .map(|path| self.reader.read_file(path).map(IntoLazy::lazy))
            .collect::<Result<Vec<_>>>()?;

        debug!("Concatenating {} frames", frames.len());
        let combined = concat_lf_diagonal(
            frames,
            UnionArgs {
                to_supertypes: true,
                ..Default::default()
            },
        )?
        .collect()?;

        match self.subset.as_deref() {
            Some(subset) if !subset.is_empty() => drop_all_missing(combined, subset),
            _ => Ok(combined),
        }
    }
}

/// Remove rows where every `subset` column is null
pub fn drop_all_missing(frame: DataFrame, subset: &[String]) -> Result<DataFrame> {
    let missing: Vec<String> = subset
        .iter()
        .filter(|name| frame.column(name.as_str()).is_err())
        .cloned()
        .collect();

    if !missing.is_empty() {
        return Err(IctError::MissingColumns { columns: missing });
    }

    let any_present = subset
        .iter()
        .map(|name| col(name.as_str()).is_not_null())
        .reduce(|acc, expr| acc.or(expr));

    let Some(any_present) = any_present else {
        return Ok(frame);
    };

    let before = frame.height();
    let filtered = frame.lazy().filter(any_present).collect()?;

    debug!(
        "Dropped {} rows with all of [{}] missing",
        before - filtered.height(),
        subset.join(", ")
    );

    Ok(filtered)
}

/// Read and merge every file of instrument `code` found in `directory`
pub fn read_instrument(
    code: &str,
    subset: Option<&[&str]>,
    directory: impl AsRef<Path>,
) -> Result<DataFrame> {
    let mut reader = InstrumentReader::default().with_directory(directory.as_ref());
    if let Some(subset) = subset {
        reader = reader.with_subset(subset.iter().copied());
    }
    reader.read_instrument(code)
}
