//! The persisted artifact of one check execution.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};

/// A run record read back from disk: the check's combined output followed by
/// the metadata trailer appended when the run finished.
///
/// The file is exclusively written by the recorder for a given check;
/// everything else (the dispatcher, dashboards) only reads it.
#[derive(Debug, Clone)]
pub struct RunRecord {
    /// Full text of the record, trailer included.
    pub raw: String,
    /// Exit code parsed from the `Exit-Code:` trailer line, if present.
    pub exit_code: Option<i32>,
    /// Timestamp parsed from the `Last-Run:` trailer line, if present.
    pub last_run: Option<DateTime<Utc>>,
}

impl RunRecord {
    /// Reads and parses the record file at `path`.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        Ok(Self::from_raw(std::fs::read_to_string(path)?))
    }

    /// Parses record text.
    ///
    /// Parsing is tolerant: a record without a trailer (for example one left
    /// behind by an interrupted run) yields `None` metadata, never an error.
    pub fn from_raw(raw: String) -> Self {
        let mut exit_code = None;
        let mut last_run = None;
        for line in raw.lines() {
            if let Some(rest) = line.strip_prefix("Exit-Code:") {
                exit_code = rest.trim().parse().ok();
            } else if let Some(rest) = line.strip_prefix("Last-Run:") {
                last_run = DateTime::parse_from_rfc3339(rest.trim())
                    .ok()
                    .map(|t| t.with_timezone(&Utc));
            }
        }
        Self { raw, exit_code, last_run }
    }

    /// Renders the metadata trailer appended to a record when a run ends.
    pub fn trailer(exit_code: i32, finished_at: DateTime<Utc>) -> String {
        format!(
            "Exit-Code: {}\nLast-Run: {}\n",
            exit_code,
            finished_at.to_rfc3339_opts(SecondsFormat::Secs, false)
        )
    }

    /// First line of the record, used elsewhere as a one-line human summary.
    pub fn summary(&self) -> &str {
        self.raw.lines().next().unwrap_or("")
    }
}
