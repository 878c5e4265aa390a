//! Error types for transform configuration

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating a transform configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML (includes invalid zoom ramps)
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to render TOML
    #[error("Failed to render config: {0}")]
    Render(#[from] toml::ser::Error),

    /// A color entry is empty
    #[error("Palette color '{0}' is empty")]
    EmptyColor(&'static str),

    /// A numeric entry is NaN or infinite
    #[error("Palette value '{0}' is not a finite number")]
    NonFinite(&'static str),

    /// The derived style name is empty
    #[error("Style name must not be empty")]
    EmptyStyleName,
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
