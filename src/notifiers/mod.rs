//! Notifier adapters: the pluggable components that turn a run record into an
//! outbound alert.
//!
//! Every backend implements the [`Notifier`] capability interface so the
//! dispatcher treats external scripts, the HTTP alert gateway, and email
//! identically:
//!
//! - [`ScriptNotifier`]: process-exec adapter for discovered executables.
//! - [`AlertaNotifier`]: posts a JSON alert to the configured gateway.
//! - [`EmailNotifier`]: gates, rate-limits, and emails a run result through
//!   a [`MailTransport`].

mod alerta;
mod email;
pub mod error;
mod mail;
mod script;
mod traits;

pub use alerta::{AlertPayload, AlertaNotifier};
pub use email::EmailNotifier;
pub use error::NotifierError;
pub use mail::{MailCommand, MailMessage, MailTransport};
pub use script::ScriptNotifier;
pub use traits::Notifier;
