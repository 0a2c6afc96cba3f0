//! Configuration error types.

use std::path::PathBuf;

/// Errors that can occur while loading or resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON.
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The config file parsed, but its top level is not a JSON object.
    #[error("Config file '{}' must contain a JSON object", .0.display())]
    NotAnObject(PathBuf),

    /// The merged configuration does not describe valid settings.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates an invalid-configuration error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
