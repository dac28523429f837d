//! The capability interface every notification backend implements.

use async_trait::async_trait;

use super::error::NotifierError;
use crate::models::{CheckEvent, Delivery};

/// A pluggable component that turns a check run into an outbound alert.
///
/// `notify` resolves to a [`Delivery`] describing what the backend observed:
/// a nonzero delivery exit code means the backend itself reported failure,
/// while `Err` means the backend could not be driven at all. Suppression by
/// policy (status gating, rate limiting) is a successful delivery.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Identity used in logs and invocation records: the plugin path for
    /// external scripts, a fixed adapter name otherwise.
    fn id(&self) -> String;

    /// Delivers one notification for `event`.
    async fn notify(&self, event: &CheckEvent) -> Result<Delivery, NotifierError>;
}
