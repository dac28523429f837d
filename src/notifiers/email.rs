//! Email notifier: status gating, rate limiting, output shaping, and
//! submission through the mail transport.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::{
    error::NotifierError,
    mail::{MailMessage, MailTransport},
    traits::Notifier,
};
use crate::{
    config::EmailConfig,
    models::{CheckEvent, Delivery, Severity},
    ratelimit::{Admission, RateLimitStore},
};

/// In-process notifier that emails a run result to the configured recipient.
///
/// Suppression is always success: a gated status or a denied rate-limit
/// admission delivers nothing and reports a zero exit, only a transport
/// failure is an error.
pub struct EmailNotifier {
    config: EmailConfig,
    store: Arc<dyn RateLimitStore>,
    transport: Arc<dyn MailTransport>,
}

impl EmailNotifier {
    /// Creates a notifier with the given configuration and collaborators.
    pub fn new(
        config: EmailConfig,
        store: Arc<dyn RateLimitStore>,
        transport: Arc<dyn MailTransport>,
    ) -> Self {
        Self { config, store, transport }
    }

    /// Rate-limit key for one check; keyed per check per notifier so other
    /// rate-limited backends never share a window with email.
    fn rate_key(check_id: &str) -> String {
        format!("email_rate_{check_id}")
    }

    fn shaped_output(&self, output: &str) -> String {
        if !self.config.include_output {
            return "(Output suppressed)".to_string();
        }
        truncate_output(output, self.config.max_output_lines)
    }

    fn compose(&self, event: &CheckEvent, severity: Severity, output: &str) -> MailMessage {
        let status_name = severity.status_label();
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let subject = format!(
            "{} {}: {} on {}",
            self.config.subject_prefix, status_name, event.check_id, event.hostname
        );
        let body = format!(
            "Monitoring Alert\n\
             ================\n\
             \n\
             Check:     {check}\n\
             Status:    {status} ({code})\n\
             Host:      {host}\n\
             Time:      {time}\n\
             \n\
             Output:\n\
             -------\n\
             {output}\n\
             \n\
             ---\n\
             This notification was generated by the checker monitoring system.\n\
             To modify notification settings, update /etc/checker/notify_email.env",
            check = event.check_id,
            status = status_name,
            code = event.exit_code,
            host = event.hostname,
            time = timestamp,
            output = output,
        );
        MailMessage {
            subject,
            from: self.config.from.clone(),
            to: self.config.to.clone(),
            body,
        }
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    fn id(&self) -> String {
        "email".to_string()
    }

    async fn notify(&self, event: &CheckEvent) -> Result<Delivery, NotifierError> {
        let severity = Severity::from_exit_code(&event.exit_code);

        let enabled = match severity {
            Severity::Warning => self.config.notify_on_warning,
            Severity::Critical => self.config.notify_on_critical,
            _ => true,
        };
        if !enabled {
            tracing::debug!(check = %event.check_id, status = %severity, "email disabled for this status");
            return Ok(Delivery::default());
        }

        let admission = self
            .store
            .admit(
                &Self::rate_key(&event.check_id),
                self.config.rate_limit,
                self.config.rate_window,
            )
            .await?;
        if let Admission::Denied { in_window } = admission {
            return Ok(Delivery::message(format!(
                "Rate limit exceeded for {} ({}/{} emails in {}s)",
                event.check_id,
                in_window,
                self.config.rate_limit,
                self.config.rate_window.as_secs()
            )));
        }

        let output = self.shaped_output(&event.output);
        let message = self.compose(event, severity, &output);
        self.transport.send(&message).await?;

        Ok(Delivery::message(format!(
            "Email notification sent to {} for {} ({})",
            self.config.to,
            event.check_id,
            severity.status_label()
        )))
    }
}

/// Caps `output` at `max_lines` lines, appending a notice with the original
/// line count when anything was dropped.
///
/// Lines are `\n`-separated segments, so text ending in a newline counts one
/// trailing empty line.
fn truncate_output(output: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = output.split('\n').collect();
    let line_count = lines.len();
    if line_count <= max_lines {
        return output.to_string();
    }
    format!(
        "{}\n\n... (truncated, showing first {} of {} lines)",
        lines[..max_lines].join("\n"),
        max_lines,
        line_count
    )
}
