//! Instapaper CSV writer.

use std::io::Write;

use crate::keep::Bookmark;

pub const CSV_HEADER: [&str; 5] = ["URL", "Title", "Selection", "Folder", "Timestamp"];

/// Streams one row per accepted bookmark. The header is written on creation.
///
/// Minimal quoting and `\r\n` record terminators.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    timestamp: String,
}

impl<W: Write> CsvSink<W> {
    /// `timestamp` (Unix seconds) is stamped on every row written by this sink.
    pub fn new(inner: W, timestamp: i64) -> csv::Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b',')
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(csv::Terminator::CRLF)
            .from_writer(inner);
        writer.write_record(CSV_HEADER)?;
        Ok(Self {
            writer,
            timestamp: timestamp.to_string(),
        })
    }

    /// `[url, title, "", labels, timestamp]`; Selection is always empty.
    pub fn write_bookmark(&mut self, bookmark: &Bookmark) -> csv::Result<()> {
        self.writer.write_record([
            bookmark.url.as_str(),
            bookmark.title.as_str(),
            "",
            bookmark.labels.as_str(),
            self.timestamp.as_str(),
        ])
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> std::io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}
