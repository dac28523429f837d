//! Command-line entry points, one per pipeline stage.
//!
//! Each submodule pairs a clap `Args` struct with an `execute` function that
//! returns the process exit code; the error taxonomy mapping (fatal
//! configuration → 1, recorder reserved → 9, dispatch sentinel → 8) happens
//! here, at the edge.

pub mod notify;
pub mod notify_alerta;
pub mod notify_email;
pub mod record;

pub use notify::NotifyArgs;
pub use notify_alerta::NotifyAlertaArgs;
pub use notify_email::NotifyEmailArgs;
pub use record::RecordArgs;
