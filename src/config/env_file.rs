//! Line-oriented `KEY=value` configuration files.
//!
//! The format is deliberately small: blank lines and `#` comments are
//! ignored, each remaining line is split on the first `=`, and surrounding
//! single or double quotes are stripped from the value.

use std::{collections::HashMap, path::Path, str::FromStr};

use super::error::ConfigError;

/// A parsed `KEY=value` configuration file.
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    values: HashMap<String, String>,
}

impl EnvFile {
    /// Loads and parses the file at `path`.
    ///
    /// A missing file is reported as [`ConfigError::Missing`] so callers can
    /// treat it as the fatal condition the notifier contract requires.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Missing(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Ok(Self::parse(&text))
    }

    /// Parses env-file text. Lines without a `=` are skipped.
    pub fn parse(text: &str) -> Self {
        let mut values = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim().trim_matches('"').trim_matches('\'');
            values.insert(key.trim().to_string(), value.to_string());
        }
        Self { values }
    }

    /// Returns the raw value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the value for `key`, or `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Parses the value for `key`, falling back to `default` when the key is
    /// absent or its value does not parse.
    pub fn get_parsed<T: FromStr>(&self, key: &str, default: T) -> T {
        self.get(key).and_then(|v| v.parse().ok()).unwrap_or(default)
    }

    /// Interprets the value for `key` as a flag.
    ///
    /// Only the literal `true` enables a flag; any other present value
    /// disables it.
    pub fn get_flag(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(value) => value == "true",
            None => default,
        }
    }
}
