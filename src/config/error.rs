//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The required configuration file does not exist.
    #[error("configuration file not found: {}", .0.display())]
    Missing(PathBuf),

    /// The configuration file exists but could not be read.
    #[error("failed to read configuration file {}: {source}", path.display())]
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A required key is absent from the file.
    #[error("missing required configuration key: {0}")]
    MissingKey(&'static str),

    /// A value is present but failed validation.
    #[error("invalid value for {key}: {reason}")]
    InvalidValue {
        /// The offending key.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
