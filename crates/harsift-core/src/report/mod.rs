//! Report generation: load the archive, filter entries, format and append
//! each match to the output file.

mod block;
mod format;
mod writer;

pub use format::{compact_json, format_entry};
pub use writer::{header_timestamp, ReportWriter};

use chrono::Local;
use std::path::{Path, PathBuf};

use crate::error::ReportError;
use crate::exclude::ExcludeRule;
use crate::filter;
use crate::har;

/// Counts from a completed run, for the CLI confirmation line.
#[derive(Debug)]
pub struct ReportSummary {
    /// Entries present in the archive.
    pub total: usize,
    /// Entries that passed the filter and were written out.
    pub included: usize,
    /// Where the report landed.
    pub output: PathBuf,
}

/// Runs the whole pipeline: read and decode the archive at `input`, then
/// write the timestamp header and one block per reportable entry to
/// `output`, in capture order.
pub fn generate(
    input: &Path,
    output: &Path,
    excludes: &[ExcludeRule],
) -> Result<ReportSummary, ReportError> {
    let archive = har::load_archive(input)?;
    let entries = &archive.log.entries;
    tracing::debug!("loaded {} entries from {}", entries.len(), input.display());

    let mut writer = ReportWriter::create(output)?;
    writer.header(&header_timestamp(Local::now()))?;

    let mut included = 0usize;
    for entry in entries {
        if !filter::is_reportable(entry) {
            continue;
        }
        writer.append(&format_entry(entry, excludes))?;
        included += 1;
    }
    writer.finish()?;

    Ok(ReportSummary {
        total: entries.len(),
        included,
        output: output.to_path_buf(),
    })
}
