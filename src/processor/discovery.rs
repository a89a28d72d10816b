//! File discovery for instrument datasets
//!
//! Finds the ICARTT files of one instrument by matching the instrument code
//! against entry names in a single directory.

use crate::error::{IctError, Result};
use glob::{MatchOptions, Pattern};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File discovery component for instrument directories
#[derive(Debug, Clone)]
pub struct FileDiscovery {
    directory: PathBuf,
}

impl FileDiscovery {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Glob pattern matching every entry whose name contains `code`
    pub fn pattern_for(&self, code: &str) -> String {
        let directory = Pattern::escape(&self.directory.to_string_lossy());
        Path::new(&directory)
            .join(format!("*{}*", Pattern::escape(code)))
            .to_string_lossy()
            .into_owned()
    }

    /// Discover all entries whose name contains `code`, sorted by path
    ///
    /// ```text
    /// inputs/ict/
    ///   AMS_20210615_R0.ict   <- matched by "AMS"
    ///   AMS_20210616_R0.ict   <- matched by "AMS"
    ///   NO2_20210615_R0.ict
    /// ```
    pub fn discover_instrument_files(&self, code: &str) -> Result<Vec<PathBuf>> {
        if !self.directory.is_dir() {
            return Err(IctError::DirectoryNotFound {
                path: self.directory.clone(),
            });
        }

        let pattern = self.pattern_for(code);
        debug!("Searching for instrument files: {}", pattern);

        // Match shell globbing: '*' does not pick up hidden entries
        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };

        // Both pattern parts are escaped, so only a malformed directory name can fail here
        let entries = glob::glob_with(&pattern, options).map_err(|source| {
            IctError::io(
                &self.directory,
                io::Error::new(io::ErrorKind::InvalidInput, source),
            )
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| {
                let source = io::Error::new(e.error().kind(), e.error().to_string());
                IctError::io(e.path(), source)
            })?;
            files.push(path);
        }

        files.sort();

        if files.is_empty() {
            return Err(IctError::NoMatchingFiles { pattern });
        }

        debug!("Found {} files for instrument '{}'", files.len(), code);
        Ok(files)
    }
}
