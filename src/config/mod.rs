//! Configuration loading for the notifier entry points.
//!
//! Notifier settings live in line-oriented `KEY=value` files (see
//! [`EnvFile`]); [`AlertaConfig`] and [`EmailConfig`] are the typed views
//! over them. Fixed filesystem locations and their environment overrides are
//! collected in [`paths`].

mod alerta;
mod email;
mod env_file;
mod error;
pub mod paths;

pub use alerta::AlertaConfig;
pub use email::EmailConfig;
pub use env_file::EnvFile;
pub use error::ConfigError;
