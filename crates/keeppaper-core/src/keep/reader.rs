//! Enumerate a Takeout `Keep/` directory and parse each note file lazily.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};

use super::parse::{parse_item, ParsedItem};
use super::record::RawRecord;

const NOTE_SUFFIX: &str = ".json";

/// Open `path` for reading notes.
///
/// With `strict` set, anything but an existing directory fails fast with
/// [`ConvertError::NotADirectory`]. Without it the pre-check is skipped and
/// listing the path is attempted regardless, so the failure (if any) surfaces
/// as [`ConvertError::ListDir`].
pub fn read_bookmarks(path: &Path, strict: bool) -> Result<NoteFiles> {
    if strict && !path.is_dir() {
        return Err(ConvertError::NotADirectory(path.to_path_buf()));
    }
    let entries = fs::read_dir(path).map_err(|source| ConvertError::ListDir {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("reading notes from {}", path.display());
    Ok(NoteFiles {
        dir: path.to_path_buf(),
        entries,
    })
}

/// Single-pass iterator of `(file name, parse outcome)` in directory order.
///
/// Files not ending in `.json` are skipped silently. A file that cannot be
/// read or decoded yields an error; callers are expected to stop there.
#[derive(Debug)]
pub struct NoteFiles {
    dir: PathBuf,
    entries: fs::ReadDir,
}

impl Iterator for NoteFiles {
    type Item = Result<(String, ParsedItem)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    return Some(Err(ConvertError::ListDir {
                        path: self.dir.clone(),
                        source,
                    }))
                }
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.ends_with(NOTE_SUFFIX) {
                continue;
            }
            let parsed = read_note(&entry.path()).map(|item| parse_item(&item));
            return Some(parsed.map(|item| (name, item)));
        }
    }
}

fn read_note(path: &Path) -> Result<RawRecord> {
    let bytes = fs::read(path).map_err(|source| ConvertError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
