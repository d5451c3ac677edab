//! End-to-end conversion: read → group (+ ignore/CSV) → HTML export.

use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::group::group_by_labels;
use crate::instapaper::{export_instapaper, OutputPaths};
use crate::keep::read_bookmarks;

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub groups: usize,
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bookmarks in {} groups, {} notes ignored",
            self.accepted, self.groups, self.rejected
        )
    }
}

/// Convert the Keep notes in `input` into `ignore.txt`, `instapaper.csv` and
/// `instapaper.html` inside `out_dir`.
///
/// `input` must be a directory; this is checked before any artifact is
/// touched. A note that fails to decode aborts the run with the artifacts
/// left partial.
pub fn convert(input: &Path, out_dir: &Path) -> Result<ConversionSummary> {
    let notes = read_bookmarks(input, true)?;
    let paths = OutputPaths::in_dir(out_dir);

    let grouping = group_by_labels(notes, &paths)?;
    export_instapaper(&grouping.index, &paths.html)?;

    let summary = ConversionSummary {
        accepted: grouping.index.bookmark_count(),
        rejected: grouping.rejected,
        groups: grouping.index.len(),
    };
    tracing::info!("conversion finished: {}", summary);
    Ok(summary)
}
