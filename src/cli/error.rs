//! CLI error type

use std::path::PathBuf;

use crate::models::DocumentError;
use crate::storage::StorageError;
use crate::transform::ConfigError;

/// Errors surfaced by CLI commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}
