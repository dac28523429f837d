//! Executes one check command and records its output durably.
//!
//! The recorder merges the child's stdout and stderr into one stream and
//! tees it to its own stdout and to the run-record file, flushing both as
//! each chunk arrives so a concurrent reader of the file is never behind
//! the console. Output bytes pass through unchanged. When the child exits,
//! the metadata trailer is appended and the child's exit code becomes the
//! recorder's.

pub mod error;

pub use error::RecorderError;

use std::{io::Write, path::PathBuf, process::Stdio};

use chrono::Utc;
use tokio::{
    io::{AsyncRead, AsyncReadExt},
    process::Command,
    sync::mpsc,
};

use crate::models::{RunRecord, exit_code_of};

/// Reserved exit code for recorder-fatal conditions: an unopenable
/// destination or an unstartable check command. Distinguishable from any
/// normal check result.
pub const FATAL_EXIT_CODE: i32 = 9;

/// Capacity of the channel between the child's stream readers and the tee
/// writer. Bounded so a fast child blocks on the write path instead of
/// buffering without limit.
const TEE_CHANNEL_CAPACITY: usize = 64;

/// Read size for each child stream.
const TEE_CHUNK_SIZE: usize = 8192;

/// Records one execution of a check command into a run-record file.
pub struct RunRecorder {
    destination: PathBuf,
    command: PathBuf,
}

impl RunRecorder {
    /// Creates a recorder writing to `destination` and running `command`.
    pub fn new(destination: impl Into<PathBuf>, command: impl Into<PathBuf>) -> Self {
        Self { destination: destination.into(), command: command.into() }
    }

    /// Runs the check command to completion and returns its exit code.
    ///
    /// The destination is truncated first; a record always reflects only the
    /// latest run. It is opened before the child is spawned so an unwritable
    /// record path never triggers a check.
    pub async fn run(&self) -> Result<i32, RecorderError> {
        let mut record = std::fs::File::create(&self.destination).map_err(|source| {
            RecorderError::Destination { path: self.destination.clone(), source }
        })?;

        let mut child = Command::new(&self.command)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| RecorderError::Spawn { command: self.command.clone(), source })?;

        let (chunk_tx, mut chunk_rx) = mpsc::channel::<Vec<u8>>(TEE_CHANNEL_CAPACITY);

        // stdout/stderr are piped above, so both handles exist. Each stream
        // keeps its own ordering; interleaving across the two is arrival
        // order, exactly as a shared `2>&1` descriptor would deliver it.
        if let Some(stdout) = child.stdout.take() {
            spawn_stream_reader(stdout, chunk_tx.clone());
        }
        if let Some(stderr) = child.stderr.take() {
            spawn_stream_reader(stderr, chunk_tx.clone());
        }
        drop(chunk_tx);

        // Single writer: console first, then the record, flushing both so a
        // concurrent reader of the file never lags the console. Bytes are
        // written exactly as the child produced them; line endings and a
        // partial final line are the child's own.
        let mut console = std::io::stdout();
        while let Some(chunk) = chunk_rx.recv().await {
            console.write_all(&chunk)?;
            console.flush()?;
            record.write_all(&chunk)?;
            record.flush()?;
        }

        let status = child.wait().await?;
        let code = exit_code_of(status);

        record.write_all(RunRecord::trailer(code, Utc::now()).as_bytes())?;
        record.flush()?;

        tracing::debug!(code, destination = %self.destination.display(), "run recorded");
        Ok(code)
    }
}

/// Drains one child stream into the tee channel in raw chunks. The bounded
/// send is the backpressure point: when the record file is slow, the reader
/// waits and the child eventually blocks on a full pipe.
fn spawn_stream_reader<R>(mut stream: R, tx: mpsc::Sender<Vec<u8>>)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = vec![0u8; TEE_CHUNK_SIZE];
        loop {
            match stream.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    if tx.send(buf[..n].to_vec()).await.is_err() {
                        break;
                    }
                }
            }
        }
    });
}
