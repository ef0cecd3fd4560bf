//! Load a `.har` capture from disk into the in-memory archive.

use std::fs;
use std::path::Path;

use crate::error::ReportError;

use super::parse::Archive;

/// Required input extension, checked before any file I/O.
const HAR_EXTENSION: &str = "har";

/// Rejects paths that do not carry the `.har` extension.
///
/// The check is purely lexical and runs before the file is touched, so a
/// mistyped path fails fast with the offending extension in the message.
pub fn require_har_extension(path: &Path) -> Result<(), ReportError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(HAR_EXTENSION) => Ok(()),
        Some(other) => Err(ReportError::InvalidExtension {
            extension: format!(".{other}"),
        }),
        None => Err(ReportError::InvalidExtension {
            extension: String::new(),
        }),
    }
}

/// Reads and decodes the archive at `path`.
///
/// Missing sub-objects inside the document decode to zero values, but a
/// document that is not valid JSON at all is a hard error.
pub fn load_archive(path: &Path) -> Result<Archive, ReportError> {
    require_har_extension(path)?;
    let bytes = fs::read(path).map_err(|source| ReportError::ArchiveRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ReportError::ArchiveDecode {
        path: path.to_path_buf(),
        source,
    })
}
