//! `checker record`: run the check command and record its output.

use std::path::PathBuf;

use clap::Args;

use crate::{
    config::paths,
    recorder::{FATAL_EXIT_CODE, RunRecorder},
};

/// Arguments for the `record` subcommand.
#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Destination run-record file; truncated and rewritten on every run.
    pub run_file: PathBuf,
}

/// Executes the check command, tees its output into the run record, and
/// returns the child's exit code, or the reserved fatal code when the record
/// cannot be opened or the command cannot start.
pub async fn execute(args: RecordArgs) -> i32 {
    let recorder = RunRecorder::new(args.run_file, paths::check_command());
    match recorder.run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            FATAL_EXIT_CODE
        }
    }
}
