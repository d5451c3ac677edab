//! Error type for the conversion pipeline.

use std::path::PathBuf;

/// Fatal failures of a conversion run. Rejected notes are not errors; they go
/// to `ignore.txt` instead.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Input argument does not resolve to a directory.
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Listing the input directory failed (missing, permission denied, ...).
    #[error("list directory {}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `.json` note file could not be read.
    #[error("read note file {}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `.json` note file is not valid JSON (or not a note object).
    #[error("decode note file {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Creating, writing or flushing one of the output artifacts failed.
    #[error("write output {}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub(crate) fn output(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| ConvertError::Output { path, source }
    }
}

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
