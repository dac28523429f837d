//! Error types for notifier adapters.

use thiserror::Error;

/// Errors a notifier adapter can fail with.
#[derive(Debug, Error)]
pub enum NotifierError {
    /// The notifier's configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The alert gateway rejected the request.
    #[error("alert gateway request failed: {0}")]
    Gateway(String),

    /// The underlying HTTP client failed before a response arrived.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The mail transport failed to submit the message.
    #[error("mail transport failed: {0}")]
    MailTransport(String),

    /// A plugin process could not be started.
    #[error("failed to start notifier {id}: {source}")]
    Spawn {
        /// Identity of the notifier that could not be started.
        id: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to a plugin process failed.
    #[error("i/o with notifier {id} failed: {source}")]
    PluginIo {
        /// Identity of the notifier the pipe belongs to.
        id: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The rate-limit store failed.
    #[error(transparent)]
    RateLimit(#[from] crate::ratelimit::RateLimitError),
}
