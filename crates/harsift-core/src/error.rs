//! Error taxonomy for a report run.

use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of a report run, in pipeline order. All are fatal: the CLI
/// prints the rendered message to stderr and exits non-zero.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Input path does not end in `.har`. Raised before any I/O.
    #[error("invalid input extension {extension:?}: must pass a '.har' file")]
    InvalidExtension { extension: String },

    /// Input file could not be opened or read.
    #[error("failed to read archive {}: {source}", .path.display())]
    ArchiveRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not a valid JSON document. A malformed archive is an
    /// error, never an empty report.
    #[error("malformed HAR JSON in {}: {source}", .path.display())]
    ArchiveDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Report file (or one of its parent directories) could not be created.
    #[error("failed to create report {}: {source}", .path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing the report failed mid-run.
    #[error("failed to write report {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
