//! Durable sliding-window rate limiting for outbound notifications.
//!
//! A store keeps, per key, the timestamps of previously admitted sends and
//! admits a new one only while fewer than the limit fall inside the trailing
//! window. The persistence mechanism sits behind [`RateLimitStore`] so
//! notifier logic never touches the on-disk representation.

pub mod error;
mod file;
pub mod traits;

pub use error::RateLimitError;
pub use file::FileRateLimitStore;
pub use traits::{Admission, RateLimitStore};
