//! Error types for notifier dispatch.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from building the notifier registry.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The plugin directory could not be scanned.
    #[error("failed to scan notifier directory {}: {source}", path.display())]
    Scan {
        /// Directory that could not be scanned.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
