//! Error types for the rate-limit store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing rate-limit state.
#[derive(Debug, Error)]
pub enum RateLimitError {
    /// The state directory could not be created.
    #[error("failed to create rate-limit directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The state file could not be read.
    #[error("failed to read rate-limit state {}: {source}", path.display())]
    Read {
        /// State file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The updated state could not be persisted.
    #[error("failed to persist rate-limit state {}: {source}", path.display())]
    Persist {
        /// State file that could not be replaced.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
