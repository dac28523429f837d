//! The inputs handed to every notifier for one check run.

/// What a notifier needs to know about one check run: which host and check
/// ran, how it exited, and everything it printed.
///
/// The exit code is kept as the raw string a plugin receives on its command
/// line; severity interpretation happens in each notifier.
#[derive(Debug, Clone)]
pub struct CheckEvent {
    /// Host the check ran on.
    pub hostname: String,
    /// Stable identifier of the check definition.
    pub check_id: String,
    /// Raw exit code string, usually `"0"`..`"3"`.
    pub exit_code: String,
    /// Full run-record text.
    pub output: String,
}
