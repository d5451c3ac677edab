//! Partition bookmarks by label string while streaming `ignore.txt` and
//! `instapaper.csv`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{ConvertError, Result};
use crate::instapaper::{CsvSink, OutputPaths};
use crate::keep::{Bookmark, ParsedItem};

/// Bookmarks keyed by their exact joined label string (`""` included).
/// Groups keep first-seen order; items keep processing order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GroupedIndex {
    groups: IndexMap<String, Vec<Bookmark>>,
}

impl GroupedIndex {
    /// Append to the bookmark's group, creating it at the end if new.
    pub fn push(&mut self, bookmark: Bookmark) {
        self.groups
            .entry(bookmark.labels.clone())
            .or_default()
            .push(bookmark);
    }

    pub fn get(&self, labels: &str) -> Option<&[Bookmark]> {
        self.groups.get(labels).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Bookmark])> {
        self.groups
            .iter()
            .map(|(labels, items)| (labels.as_str(), items.as_slice()))
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of bookmarks across all groups.
    pub fn bookmark_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Result of the grouping pass.
#[derive(Debug, Default)]
pub struct Grouping {
    pub index: GroupedIndex,
    /// Files written to `ignore.txt`.
    pub rejected: usize,
}

/// Consume `items`, writing `ignore.txt` and `instapaper.csv` at `paths`
/// (both truncated first), and return the grouped bookmarks.
///
/// The CSV timestamp is taken once, before the first item. The first item
/// error aborts the pass and leaves both files as written so far.
pub fn group_by_labels<I>(items: I, paths: &OutputPaths) -> Result<Grouping>
where
    I: IntoIterator<Item = Result<(String, ParsedItem)>>,
{
    let timestamp = chrono::Utc::now().timestamp();

    let mut ignore = create(&paths.ignore)?;
    let mut csv = CsvSink::new(create(&paths.csv)?, timestamp)
        .map_err(io::Error::from)
        .map_err(ConvertError::output(&paths.csv))?;

    let grouping = group_into(items, &mut ignore, &mut csv, paths)?;

    ignore.flush().map_err(ConvertError::output(&paths.ignore))?;
    csv.into_inner()
        .and_then(|mut out| out.flush())
        .map_err(ConvertError::output(&paths.csv))?;

    tracing::info!(
        "grouped {} bookmarks into {} groups, {} notes ignored (timestamp {})",
        grouping.index.bookmark_count(),
        grouping.index.len(),
        grouping.rejected,
        timestamp
    );
    Ok(grouping)
}

/// Grouping loop over caller-owned sinks. `paths` only names the sinks in
/// errors.
pub fn group_into<I, L, W>(
    items: I,
    ignore: &mut L,
    csv: &mut CsvSink<W>,
    paths: &OutputPaths,
) -> Result<Grouping>
where
    I: IntoIterator<Item = Result<(String, ParsedItem)>>,
    L: Write,
    W: Write,
{
    let mut grouping = Grouping::default();
    for item in items {
        let (filename, parsed) = item?;
        match parsed {
            ParsedItem::Accepted(bookmark) => {
                csv.write_bookmark(&bookmark)
                    .map_err(io::Error::from)
                    .map_err(ConvertError::output(&paths.csv))?;
                grouping.index.push(bookmark);
            }
            ParsedItem::Rejected(reason) => {
                tracing::debug!("ignoring {}: {}", filename, reason);
                writeln!(ignore, "{}", filename).map_err(ConvertError::output(&paths.ignore))?;
                grouping.rejected += 1;
            }
        }
    }
    Ok(grouping)
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(ConvertError::output(path))
}
