//! Severity categories derived from a check's exit code.

use serde::Serialize;

/// The category derived from a check's exit code.
///
/// Codes `0..=3` carry the conventional monitoring meanings; any other value,
/// including a non-numeric one, is categorized as [`Severity::Debug`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The check passed.
    Ok,
    /// The check found a degraded but non-critical condition.
    Warning,
    /// The check found a critical condition.
    Critical,
    /// The check could not determine the condition's state.
    Unknown,
    /// The exit code carries no conventional meaning.
    Debug,
}

impl Severity {
    /// Maps a raw exit code string to its severity.
    pub fn from_exit_code(code: &str) -> Self {
        match code {
            "0" => Severity::Ok,
            "1" => Severity::Warning,
            "2" => Severity::Critical,
            "3" => Severity::Unknown,
            _ => Severity::Debug,
        }
    }

    /// The lowercase name used by the alert gateway.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "ok",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
            Severity::Unknown => "unknown",
            Severity::Debug => "debug",
        }
    }

    /// The uppercase status label used in email subjects and bodies.
    ///
    /// Anything outside the four conventional codes is labelled `UNKNOWN`.
    pub fn status_label(&self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown | Severity::Debug => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
