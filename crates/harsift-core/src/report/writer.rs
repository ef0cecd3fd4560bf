//! Owns the report output file.

use chrono::{DateTime, Local};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ReportError;

/// Header timestamp: local time as `YYYY-M-D H:MM` (minute zero-padded,
/// everything else unpadded).
pub fn header_timestamp(now: DateTime<Local>) -> String {
    now.format("%Y-%-m-%-d %-H:%M").to_string()
}

/// Writer for the report file. Creates missing parent directories,
/// truncates any previous report, and appends blocks in the order given.
#[derive(Debug)]
pub struct ReportWriter {
    file: File,
    path: PathBuf,
}

impl ReportWriter {
    /// Creates (or truncates) the report at `path`, creating parent
    /// directories as needed.
    pub fn create(path: &Path) -> Result<Self, ReportError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| ReportError::OutputOpen {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }
        let file = File::create(path).map_err(|source| ReportError::OutputOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(ReportWriter {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Writes the timestamp header. No newline is appended; the first
    /// block's leading blanks provide the separation.
    pub fn header(&mut self, timestamp: &str) -> Result<(), ReportError> {
        self.write_all(timestamp.as_bytes())
    }

    /// Appends one formatted block.
    pub fn append(&mut self, block: &str) -> Result<(), ReportError> {
        self.write_all(block.as_bytes())
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), ReportError> {
        self.file
            .write_all(bytes)
            .map_err(|source| ReportError::OutputWrite {
                path: self.path.clone(),
                source,
            })
    }

    /// Path of the report being written.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Syncs file contents and closes the handle. On the error path the
    /// handle is closed by drop instead.
    pub fn finish(self) -> Result<(), ReportError> {
        self.file
            .sync_all()
            .map_err(|source| ReportError::OutputWrite {
                path: self.path.clone(),
                source,
            })
    }
}
