//! Mail submission seam.
//!
//! Composition and policy live in the email notifier; this module only knows
//! how to hand a finished message to a transport. The concrete transport
//! shells out to the system `mail` command, but the trait keeps SMTP or
//! anything else swappable without touching notifier logic.

use std::process::Stdio;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tokio::{io::AsyncWriteExt, process::Command};

use super::error::NotifierError;
use crate::models::exit_code_of;

/// One outbound email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    /// Subject line.
    pub subject: String,
    /// Envelope sender.
    pub from: String,
    /// Recipient.
    pub to: String,
    /// Plain-text body.
    pub body: String,
}

/// Transport used to submit a composed email.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Submits one message, returning once the transport accepted it.
    async fn send(&self, message: &MailMessage) -> Result<(), NotifierError>;
}

/// Submits mail through the system `mail` command:
/// `mail -s <subject> -r <from> <to>` with the body on stdin.
#[derive(Debug, Clone)]
pub struct MailCommand {
    program: String,
}

impl MailCommand {
    /// Uses the default `mail` program.
    pub fn new() -> Self {
        Self { program: "mail".to_string() }
    }

    /// Uses a specific mail program (tests point this at a stub).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl Default for MailCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailTransport for MailCommand {
    async fn send(&self, message: &MailMessage) -> Result<(), NotifierError> {
        let mut child = Command::new(&self.program)
            .arg("-s")
            .arg(&message.subject)
            .arg("-r")
            .arg(&message.from)
            .arg(&message.to)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                NotifierError::MailTransport(format!("failed to start {}: {e}", self.program))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(message.body.as_bytes()).await.map_err(|e| {
                NotifierError::MailTransport(format!("failed to write message body: {e}"))
            })?;
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| NotifierError::MailTransport(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NotifierError::MailTransport(format!(
                "{} exited with {}: {}",
                self.program,
                exit_code_of(output.status),
                stderr.trim()
            )));
        }
        Ok(())
    }
}
