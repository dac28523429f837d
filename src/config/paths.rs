//! Fixed filesystem locations with environment overrides.
//!
//! Deployments lay the harness out under `/etc/checker` and `/var/run/checker`.
//! The `CHECKER_*` variables exist so tests and containers can relocate
//! everything without patching the binaries.

use std::path::PathBuf;

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_VAR: &str = "CHECKER_CONFIG_DIR";
/// Environment variable overriding the notifier plugin directory.
pub const NOTIFIER_DIR_VAR: &str = "CHECKER_NOTIFIER_DIR";
/// Environment variable overriding the runtime state directory.
pub const RUNTIME_DIR_VAR: &str = "CHECKER_RUNTIME_DIR";
/// Environment variable overriding the check command the recorder runs.
pub const CHECK_COMMAND_VAR: &str = "CHECKER_CHECK_COMMAND";

/// Suffix a plugin file must carry to be discovered.
pub const NOTIFIER_SUFFIX: &str = ".sh";

fn from_env(var: &str, default: &str) -> PathBuf {
    std::env::var_os(var).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(default))
}

/// Directory holding the notifier configuration files.
pub fn config_dir() -> PathBuf {
    from_env(CONFIG_DIR_VAR, "/etc/checker")
}

/// Path of the alert gateway configuration file.
pub fn alerta_config_file() -> PathBuf {
    config_dir().join("notify_alerta.env")
}

/// Path of the email notifier configuration file.
pub fn email_config_file() -> PathBuf {
    config_dir().join("notify_email.env")
}

/// Directory scanned for executable notifier plugins.
pub fn notifier_dir() -> PathBuf {
    from_env(NOTIFIER_DIR_VAR, "/etc/checker/notifiers")
}

/// Directory holding durable runtime state such as rate-limit windows.
pub fn runtime_dir() -> PathBuf {
    from_env(RUNTIME_DIR_VAR, "/var/run/checker")
}

/// The check command the recorder executes, relative to its working
/// directory.
pub fn check_command() -> PathBuf {
    from_env(CHECK_COMMAND_VAR, "./check.sh")
}
