//! Per-dispatch result model.

/// What a notifier adapter observed while delivering one notification.
///
/// For the process-exec adapter this is the plugin's captured output and exit
/// code; in-process adapters use [`Delivery::message`] to surface an
/// operator-facing line with a zero exit code.
#[derive(Debug, Clone, Default)]
pub struct Delivery {
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
    /// Exit code of the underlying process; `0` for in-process success.
    pub exit_code: i32,
}

impl Delivery {
    /// A successful in-process delivery carrying an operator-facing message.
    pub fn message(text: impl Into<String>) -> Self {
        Self { stdout: text.into(), stderr: String::new(), exit_code: 0 }
    }

    /// Captures a finished process's output streams and exit status.
    pub fn from_output(output: &std::process::Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: exit_code_of(output.status),
        }
    }
}

/// Exit code of a finished process, mapping signal deaths to the conventional
/// `128 + signal`.
pub fn exit_code_of(status: std::process::ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    status.code().unwrap_or(-1)
}

/// Terminal result of one dispatch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifierOutcome {
    /// The notifier completed and reported success.
    Success,
    /// The notifier ran but exited nonzero.
    Failure(i32),
    /// The notifier could not be invoked or failed internally.
    Error(String),
}

/// One dispatch attempt against one notifier. Created per dispatch, terminal
/// once the notifier finishes; never persisted.
#[derive(Debug, Clone)]
pub struct NotifierInvocation {
    /// Path or name identifying the notifier.
    pub notifier_id: String,
    /// Terminal outcome of the attempt.
    pub outcome: NotifierOutcome,
    /// Captured stdout, surfaced for operator visibility.
    pub stdout: String,
    /// Captured stderr.
    pub stderr: String,
}

impl NotifierInvocation {
    /// An invocation that failed before the notifier could run.
    pub fn failed_early(notifier_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notifier_id: notifier_id.into(),
            outcome: NotifierOutcome::Error(message.into()),
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// Whether this attempt succeeded.
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, NotifierOutcome::Success)
    }
}
