//! Error types for uds-fs

use std::path::PathBuf;

/// Result type for uds-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in uds-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown service account: {name}")]
    UnknownAccount { name: String },

    #[error("Failed to parse settings store at {path}: {message}")]
    StoreParse { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
