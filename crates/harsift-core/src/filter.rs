//! The fixed entry predicate for the report.

use crate::har::{Entry, Method};

/// URL fragments that mark an entry as report-worthy.
const URL_MARKERS: [&str; 2] = ["businessHierarch", "program"];

/// Decides whether a captured exchange belongs in the report.
///
/// Read-only traffic (GET, OPTIONS) is dropped outright; the rest is kept
/// only when the request URL mentions one of the hierarchy or program
/// endpoints. Matching is case-sensitive, per entry, with no shared state.
pub fn is_reportable(entry: &Entry) -> bool {
    if matches!(entry.request.method, Method::Get | Method::Options) {
        return false;
    }
    URL_MARKERS
        .iter()
        .any(|marker| entry.request.url.contains(marker))
}
