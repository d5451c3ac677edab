//! Instapaper import formats: the CSV bookmark list and the HTML export page.

mod csv;
mod html;

use std::path::{Path, PathBuf};

pub use self::csv::{CsvSink, CSV_HEADER};
pub use html::{export_instapaper, write_document};

/// Rejected note file names, one per line.
pub const IGNORE_FILE: &str = "ignore.txt";
pub const CSV_FILE: &str = "instapaper.csv";
pub const HTML_FILE: &str = "instapaper.html";

/// Locations of the three artifacts. File names are fixed; only the
/// directory they land in varies (the CLI always uses the working directory).
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub ignore: PathBuf,
    pub csv: PathBuf,
    pub html: PathBuf,
}

impl OutputPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            ignore: dir.join(IGNORE_FILE),
            csv: dir.join(CSV_FILE),
            html: dir.join(HTML_FILE),
        }
    }
}
