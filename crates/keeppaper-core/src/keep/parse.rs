//! Turn one raw note into a bookmark, or reject it.

use std::fmt;

use super::record::{RawRecord, WEBLINK_SOURCE};

/// A note that made it through the filters, ready for both outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub url: String,
    pub title: String,
    /// Label names joined by `,`, in note order. Also the group key.
    pub labels: String,
}

/// Why a note was not turned into a bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Trashed,
    /// Needs exactly one annotation.
    AnnotationCount(usize),
    /// The single annotation is not a web link; holds its `source`.
    NotWebLink(String),
    MissingUrl,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Trashed => write!(f, "trashed"),
            Rejection::AnnotationCount(n) => write!(f, "{} annotations", n),
            Rejection::NotWebLink(source) => write!(f, "annotation source {:?}", source),
            Rejection::MissingUrl => write!(f, "web link without url"),
        }
    }
}

/// Outcome of parsing one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedItem {
    Accepted(Bookmark),
    Rejected(Rejection),
}

/// Apply the filters in order (trashed, annotation count, source, url) and
/// normalize the survivor.
pub fn parse_item(item: &RawRecord) -> ParsedItem {
    if item.is_trashed {
        return ParsedItem::Rejected(Rejection::Trashed);
    }
    let annotation = match item.annotations.as_slice() {
        [single] => single,
        other => return ParsedItem::Rejected(Rejection::AnnotationCount(other.len())),
    };
    if annotation.source != WEBLINK_SOURCE {
        return ParsedItem::Rejected(Rejection::NotWebLink(annotation.source.clone()));
    }
    let url = match annotation.url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => return ParsedItem::Rejected(Rejection::MissingUrl),
    };

    let title = item
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .or(annotation.title.as_deref())
        .unwrap_or_default();

    ParsedItem::Accepted(Bookmark {
        url,
        title: normalize_title(title),
        labels: join_labels(item),
    })
}

fn normalize_title(title: &str) -> String {
    title.replace('\n', " ").trim().to_string()
}

fn join_labels(item: &RawRecord) -> String {
    item.labels
        .iter()
        .map(|l| l.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
