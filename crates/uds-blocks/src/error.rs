//! Error types for uds-blocks

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed managed block in {path}")]
    MalformedBlock { path: PathBuf },

    #[error(
        "Repeated managed block delimiters in {path}. Please remove all repeated entries \
         (including dangling delimiters if there are any) from the file before proceeding \
         to the config update."
    )]
    RepeatedDelimiters { path: PathBuf },

    #[error(transparent)]
    Fs(#[from] uds_fs::Error),
}
