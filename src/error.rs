//! Error type for the `closest_pairs` library

use std::io;
use std::path::PathBuf;

/// Convenience alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while loading, selecting or saving pairs
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested number of closest pairs was negative
    #[error("invalid pair count {0}: the number of pairs must be non-negative")]
    InvalidCount(i64),

    /// A point could not be parsed from its textual form
    #[error("invalid point {0:?}: expected \"(x,y)\"")]
    InvalidPoint(String),

    /// A line of a point list could not be parsed
    #[error("line {line}: cannot parse {content:?} as a point")]
    Parse { line: usize, content: String },

    #[error("could not find {}", .0.display())]
    InputNotFound(PathBuf),

    /// More unique points were requested than the coordinate range can hold
    #[error("cannot generate {0} points: coordinates are limited to i32")]
    TooManyPoints(usize),

    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Wraps an I/O error with the path it happened on
    pub(crate) fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }

    /// Like [`Error::file`], but a missing file becomes [`Error::InputNotFound`]
    pub(crate) fn input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::InputNotFound(path.into()),
            _ => Self::file(path, source),
        }
    }
}
