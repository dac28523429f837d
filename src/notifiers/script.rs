//! Process-exec adapter: any executable file can act as a notifier.

use std::{path::PathBuf, process::Stdio};

use async_trait::async_trait;
use tokio::{io::AsyncWriteExt, process::Command};

use super::{error::NotifierError, traits::Notifier};
use crate::models::{CheckEvent, Delivery};

/// Runs an external executable as `<plugin> <hostname> <check_id>
/// <exit_code>` with the run-record text on its stdin, capturing its output
/// streams and exit code.
#[derive(Debug, Clone)]
pub struct ScriptNotifier {
    path: PathBuf,
}

impl ScriptNotifier {
    /// Creates an adapter for the executable at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Notifier for ScriptNotifier {
    fn id(&self) -> String {
        self.path.display().to_string()
    }

    async fn notify(&self, event: &CheckEvent) -> Result<Delivery, NotifierError> {
        let mut child = Command::new(&self.path)
            .arg(&event.hostname)
            .arg(&event.check_id)
            .arg(&event.exit_code)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| NotifierError::Spawn { id: self.id(), source })?;

        // Feed the record concurrently with draining the plugin's output so a
        // chatty plugin cannot deadlock against a large record. A plugin that
        // exits without reading its input closes the pipe; that is its
        // business, the exit code tells the rest.
        if let Some(mut stdin) = child.stdin.take() {
            let record = event.output.clone();
            let id = self.id();
            tokio::spawn(async move {
                if let Err(e) = stdin.write_all(record.as_bytes()).await {
                    tracing::debug!(notifier = %id, error = %e, "notifier stopped reading its input");
                }
                // Dropping stdin closes the pipe so plugins reading to EOF
                // terminate.
            });
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|source| NotifierError::PluginIo { id: self.id(), source })?;

        Ok(Delivery::from_output(&output))
    }
}

#[cfg(test)]
mod tests {
    use std::os::unix::fs::PermissionsExt;

    use super::*;

    fn write_script(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn event() -> CheckEvent {
        CheckEvent {
            hostname: "web01".to_string(),
            check_id: "disk".to_string(),
            exit_code: "2".to_string(),
            output: "disk full\n".to_string(),
        }
    }

    #[tokio::test]
    async fn passes_arguments_and_stdin() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(&dir, "echo.sh", "echo \"$1 $2 $3\"\ncat");
        let notifier = ScriptNotifier::new(&script);

        let delivery = notifier.notify(&event()).await.unwrap();
        assert_eq!(delivery.exit_code, 0);
        assert_eq!(delivery.stdout, "web01 disk 2\ndisk full\n");
    }

    #[tokio::test]
    async fn captures_stderr_and_nonzero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(&dir, "fail.sh", "echo nope >&2\nexit 3");
        let notifier = ScriptNotifier::new(&script);

        let delivery = notifier.notify(&event()).await.unwrap();
        assert_eq!(delivery.exit_code, 3);
        assert_eq!(delivery.stderr, "nope\n");
    }

    #[tokio::test]
    async fn missing_executable_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let notifier = ScriptNotifier::new(dir.path().join("absent.sh"));

        let result = notifier.notify(&event()).await;
        assert!(matches!(result, Err(NotifierError::Spawn { .. })));
    }
}
