use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T, E = ContractError> = std::result::Result<T, E>;

/// Errors raised while preparing, running or verifying a contract test.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("invalid interaction contents: {0}")]
    Contract(String),

    #[error("content type '{0}' is not supported by the protobuf plugin")]
    UnsupportedContentType(String),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid matcher expression '{expression}': {message}")]
    Expression { expression: String, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("gRPC call failed: {0}")]
    Status(#[from] tonic::Status),

    #[error("call did not complete within {0:?}")]
    DeadlineExceeded(std::time::Duration),

    /// The mock server rejected the run, the text is what it reported.
    #[error("mock server verification failed: {0}")]
    Verification(String),
}

impl ContractError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<tonic::transport::Error> for ContractError {
    fn from(err: tonic::transport::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
