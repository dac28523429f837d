//! Email notifier configuration.

use std::{path::Path, time::Duration};

use super::{ConfigError, EnvFile};

/// Settings for the email notifier, read from `notify_email.env`.
///
/// Every key has a default so a present-but-sparse file configures a working
/// notifier; only the file itself is required.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Envelope sender passed to the mail command.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Whether WARNING results produce an email.
    pub notify_on_warning: bool,
    /// Whether CRITICAL results produce an email.
    pub notify_on_critical: bool,
    /// Maximum emails per check within the rate window.
    pub rate_limit: u32,
    /// Sliding window the rate limit counts within.
    pub rate_window: Duration,
    /// Whether the check output is included in the body.
    pub include_output: bool,
    /// Line cap applied when output is included.
    pub max_output_lines: usize,
    /// Subject prefix.
    pub subject_prefix: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            from: "checker@localhost".to_string(),
            to: "root@localhost".to_string(),
            notify_on_warning: true,
            notify_on_critical: true,
            rate_limit: 5,
            rate_window: Duration::from_secs(3600),
            include_output: true,
            max_output_lines: 100,
            subject_prefix: "[Checker]".to_string(),
        }
    }
}

impl EmailConfig {
    /// Loads the configuration from `path`. The file must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::from_env_file(&EnvFile::load(path)?))
    }

    /// Builds the typed configuration from a parsed env file, applying
    /// defaults for absent or unparsable values.
    pub fn from_env_file(file: &EnvFile) -> Self {
        let defaults = Self::default();
        Self {
            from: file.get_or("NOTIFY_EMAIL_FROM", &defaults.from).to_string(),
            to: file.get_or("NOTIFY_EMAIL_TO", &defaults.to).to_string(),
            notify_on_warning: file.get_flag("NOTIFY_EMAIL_ON_WARNING", true),
            notify_on_critical: file.get_flag("NOTIFY_EMAIL_ON_CRITICAL", true),
            rate_limit: file.get_parsed("NOTIFY_EMAIL_RATE_LIMIT", defaults.rate_limit),
            rate_window: Duration::from_secs(
                file.get_parsed("NOTIFY_EMAIL_RATE_WINDOW", defaults.rate_window.as_secs()),
            ),
            include_output: file.get_flag("NOTIFY_EMAIL_INCLUDE_OUTPUT", true),
            max_output_lines: file
                .get_parsed("NOTIFY_EMAIL_MAX_OUTPUT_LINES", defaults.max_output_lines),
            subject_prefix: file
                .get_or("NOTIFY_EMAIL_SUBJECT_PREFIX", &defaults.subject_prefix)
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = EmailConfig::from_env_file(&EnvFile::parse(""));
        assert_eq!(config.from, "checker@localhost");
        assert_eq!(config.to, "root@localhost");
        assert!(config.notify_on_warning);
        assert!(config.notify_on_critical);
        assert_eq!(config.rate_limit, 5);
        assert_eq!(config.rate_window, Duration::from_secs(3600));
        assert!(config.include_output);
        assert_eq!(config.max_output_lines, 100);
        assert_eq!(config.subject_prefix, "[Checker]");
    }

    #[test]
    fn configured_values_override_defaults() {
        let config = EmailConfig::from_env_file(&EnvFile::parse(
            "NOTIFY_EMAIL_TO=ops@example.com\n\
             NOTIFY_EMAIL_ON_WARNING=false\n\
             NOTIFY_EMAIL_RATE_LIMIT=2\n\
             NOTIFY_EMAIL_RATE_WINDOW=60\n\
             NOTIFY_EMAIL_INCLUDE_OUTPUT=false\n\
             NOTIFY_EMAIL_MAX_OUTPUT_LINES=10\n\
             NOTIFY_EMAIL_SUBJECT_PREFIX=\"[Prod]\"\n",
        ));
        assert_eq!(config.to, "ops@example.com");
        assert!(!config.notify_on_warning);
        assert!(config.notify_on_critical);
        assert_eq!(config.rate_limit, 2);
        assert_eq!(config.rate_window, Duration::from_secs(60));
        assert!(!config.include_output);
        assert_eq!(config.max_output_lines, 10);
        assert_eq!(config.subject_prefix, "[Prod]");
    }

    #[test]
    fn unparsable_numbers_fall_back_to_defaults() {
        let config = EmailConfig::from_env_file(&EnvFile::parse(
            "NOTIFY_EMAIL_RATE_LIMIT=lots\nNOTIFY_EMAIL_MAX_OUTPUT_LINES=-3\n",
        ));
        assert_eq!(config.rate_limit, 5);
        assert_eq!(config.max_output_lines, 100);
    }
}
