//! The admission interface rate-limited notifiers consume.

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::error::RateLimitError;

/// Outcome of one admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The send may go out; its timestamp has been recorded.
    Granted,
    /// The window is full.
    Denied {
        /// How many prior sends remain inside the window. Can exceed the
        /// limit when a lower limit is configured against existing state.
        in_window: usize,
    },
}

impl Admission {
    /// Whether the send may go out.
    pub fn is_granted(&self) -> bool {
        matches!(self, Admission::Granted)
    }
}

/// A durable sliding-window admission counter.
///
/// Implementations persist, per key, the timestamps of previously admitted
/// sends and admit a new send only while fewer than `limit` of them fall
/// inside the trailing `window`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    /// Decides whether one more send may go out for `key`.
    ///
    /// Admission appends the current timestamp to the durable set; denial
    /// reports the retained in-window count and leaves the set pruned but
    /// not appended, so the window keeps sliding.
    async fn admit(
        &self,
        key: &str,
        limit: u32,
        window: Duration,
    ) -> Result<Admission, RateLimitError>;
}
