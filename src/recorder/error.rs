//! Error types for the run recorder.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions that prevent a run from being recorded.
///
/// Every variant maps to the reserved recorder exit code, distinguishable
/// from any normal check result.
#[derive(Debug, Error)]
pub enum RecorderError {
    /// The destination record file could not be opened for writing. Raised
    /// before the check command is invoked.
    #[error("cannot open run record {} for writing: {source}", path.display())]
    Destination {
        /// The unwritable destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The check command could not be started.
    #[error("cannot start check command {}: {source}", command.display())]
    Spawn {
        /// The command that failed to start.
        command: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading the child's output or writing the record failed mid-run.
    #[error("failed while recording run output: {0}")]
    Io(#[from] std::io::Error),
}
