//! Instapaper HTML export page: one `<h1>` + `<ol>` per label group.
//!
//! Titles and urls are embedded verbatim; markup characters in either break
//! the page structure.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::group::GroupedIndex;

const PREAMBLE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta http-equiv="Content-Type" content="text/html; charset=UTF-8" />
<title>Instapaper: Export</title>
</head>
<body>
"#;

const TRAILER: &str = "\n</body>\n</html>\n";

/// Write the export page for `groups` to `path`, replacing any existing file.
pub fn export_instapaper(groups: &GroupedIndex, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(ConvertError::output(path))?;
    let mut out = BufWriter::new(file);
    write_document(groups, &mut out).map_err(ConvertError::output(path))?;
    out.flush().map_err(ConvertError::output(path))?;
    tracing::info!(
        "wrote {} ({} groups)",
        path.display(),
        groups.len()
    );
    Ok(())
}

/// Render the page into any writer, groups in first-seen order.
pub fn write_document<W: Write>(groups: &GroupedIndex, out: &mut W) -> std::io::Result<()> {
    out.write_all(PREAMBLE.as_bytes())?;
    for (labels, items) in groups.iter() {
        write!(out, "\n<h1>{}</h1>\n\n<ol>\n", labels)?;
        for item in items {
            writeln!(out, "<li><a href=\"{}\">{}</a>", item.url, item.title)?;
        }
        out.write_all(b"</ol>\n")?;
    }
    out.write_all(TRAILER.as_bytes())
}
