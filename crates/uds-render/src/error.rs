//! Error types for uds-render

/// Result type for uds-render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid cluster address: {address}")]
    InvalidAddress { address: String },

    #[error("No cluster members were found")]
    NoMembers,

    #[error("Failed to serialize service descriptor: {0}")]
    Serialize(#[from] serde_json::Error),
}
