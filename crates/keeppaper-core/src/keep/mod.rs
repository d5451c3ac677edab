//! Google Keep Takeout reader: decode note files and filter them down to
//! single web-link bookmarks.
//!
//! A note qualifies when it is not trashed and carries exactly one annotation
//! whose source is `WEBLINK`. Its title falls back to the link's own title,
//! and its labels are joined into the group key.

mod parse;
mod reader;
mod record;

pub use parse::{parse_item, Bookmark, ParsedItem, Rejection};
pub use reader::{read_bookmarks, NoteFiles};
pub use record::{RawAnnotation, RawLabel, RawRecord, WEBLINK_SOURCE};
