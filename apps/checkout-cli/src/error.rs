//! Error types for the quote CLI.

use std::path::PathBuf;

use shopcart_core::{CoreError, ValidationError};

/// Result type alias for CLI operations.
pub type AppResult<T> = Result<T, AppError>;

/// Everything that can stop a quote from being produced.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read cart from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Failed to parse pricing config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid cart JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cart rejected: {0}")]
    Rejected(#[from] ValidationError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AppError {
    /// Process exit code for this error.
    ///
    /// 2 for bad invocation, 3 for a cart that failed validation, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) => 2,
            AppError::Rejected(_) => 3,
            _ => 1,
        }
    }
}
