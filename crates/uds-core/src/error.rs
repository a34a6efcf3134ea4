//! Error types for uds-core

/// Result type for uds-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while applying or removing the integration.
///
/// Leaf-crate errors propagate unchanged; the orchestrator never retries and
/// never degrades, so callers see exactly what failed and where.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Blocks(#[from] uds_blocks::Error),

    #[error(transparent)]
    Fs(#[from] uds_fs::Error),

    #[error(transparent)]
    Render(#[from] uds_render::Error),

    #[error("Topology query failed: {message}")]
    Topology { message: String },
}

impl Error {
    pub fn topology(message: impl Into<String>) -> Self {
        Self::Topology {
            message: message.into(),
        }
    }
}
