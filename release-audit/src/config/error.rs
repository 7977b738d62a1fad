//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse config file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A required setting was not provided by the file, flags or environment.
    #[error("Missing required setting: {setting}")]
    MissingSetting { setting: &'static str },

    /// A setting was provided but is not usable.
    #[error("Invalid value for '{setting}': {message}")]
    ValidationError {
        setting: &'static str,
        message: String,
    },
}
