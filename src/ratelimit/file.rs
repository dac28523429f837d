//! File-backed rate-limit state: one newline-delimited list of epoch seconds
//! per key.

use std::{
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

use async_trait::async_trait;
use chrono::Utc;
use tempfile::NamedTempFile;

use super::{
    error::RateLimitError,
    traits::{Admission, RateLimitStore},
};

/// Durable [`RateLimitStore`] keeping one `<key>.txt` file per key under a
/// base directory.
///
/// Updates are written to a temporary file and atomically renamed over the
/// old state, so a reader never observes a partial set. There is no
/// cross-process lock; concurrent writers for the same key are
/// last-writer-wins, which the single-writer-per-key deployment accepts.
#[derive(Debug, Clone)]
pub struct FileRateLimitStore {
    dir: PathBuf,
}

impl FileRateLimitStore {
    /// Creates a store rooted at `dir`. The directory is created on first
    /// use.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// State file for `key`. Keys become file names, so path separators are
    /// replaced.
    fn state_file(&self, key: &str) -> PathBuf {
        let name: String = key.chars().map(|c| if c == '/' { '_' } else { c }).collect();
        self.dir.join(format!("{name}.txt"))
    }

    fn read_timestamps(path: &Path) -> Result<Vec<i64>, RateLimitError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(text.lines().filter_map(|line| line.trim().parse().ok()).collect()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(source) => Err(RateLimitError::Read { path: path.to_path_buf(), source }),
        }
    }

    fn write_timestamps(&self, path: &Path, timestamps: &[i64]) -> Result<(), RateLimitError> {
        let persist_err =
            |source| RateLimitError::Persist { path: path.to_path_buf(), source };
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(persist_err)?;
        for ts in timestamps {
            writeln!(tmp, "{ts}").map_err(persist_err)?;
        }
        tmp.persist(path).map_err(|e| persist_err(e.error))?;
        Ok(())
    }
}

#[async_trait]
impl RateLimitStore for FileRateLimitStore {
    async fn admit(
        &self,
        key: &str,
        limit: u32,
        window: Duration,
    ) -> Result<Admission, RateLimitError> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|source| RateLimitError::CreateDir { path: self.dir.clone(), source })?;

        let path = self.state_file(key);
        let now = Utc::now().timestamp();
        let window = window.as_secs() as i64;

        let mut timestamps: Vec<i64> = Self::read_timestamps(&path)?
            .into_iter()
            .filter(|ts| now - ts < window)
            .collect();

        if timestamps.len() >= limit as usize {
            // Denied: persist the pruned set so the window keeps sliding.
            self.write_timestamps(&path, &timestamps)?;
            tracing::debug!(key, count = timestamps.len(), limit, "rate limit window is full");
            return Ok(Admission::Denied { in_window: timestamps.len() });
        }

        timestamps.push(now);
        self.write_timestamps(&path, &timestamps)?;
        Ok(Admission::Granted)
    }
}
