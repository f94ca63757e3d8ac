//! Archive error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by archive persistence.
///
/// A parse failure aborts the whole load; the target directory is never
/// left partially populated.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The archive file could not be opened for the requested mode.
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The archive could not be read or written once open.
    #[error("archive io error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A malformed record or header. Lines are numbered from 1.
    #[error("malformed archive at line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Result type for archive operations.
pub type ArchiveResult<T> = Result<T, ArchiveError>;
