use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures inside the layout engine's persistence layer.
///
/// These never cross the engine's public placement surface: the engine logs
/// them and carries on with its in-memory state.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing the history file failed.
    #[error("history I/O at {path}: {source}")]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The history file is not a JSON object of geometry records.
    #[error("history file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A single record could not be turned into a window frame.
    #[error("invalid history record for key '{key}': {reason}")]
    InvalidRecord {
        /// Raw JSON object key.
        key: String,
        /// Why the record was rejected.
        reason: String,
    },

    /// The background history writer has shut down.
    #[error("history writer thread is gone")]
    WriterClosed,
}

impl Error {
    /// Wrap an I/O error with the path being accessed.
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for fallible persistence helpers.
pub type Result<T> = std::result::Result<T, Error>;
