//! Alert gateway connection configuration.

use std::path::Path;

use url::Url;

use super::{ConfigError, EnvFile};

/// Connection settings for the alert gateway, read from `notify_alerta.env`.
#[derive(Debug, Clone)]
pub struct AlertaConfig {
    /// Endpoint the alert JSON is posted to.
    pub url: Url,
    /// Optional API key sent as an `Authorization: Key <...>` header.
    pub api_key: Option<String>,
    /// Environment label attached to every alert.
    pub environment: String,
}

impl AlertaConfig {
    /// Loads the configuration from `path`. The file must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_env_file(&EnvFile::load(path)?)
    }

    /// Builds the typed configuration from a parsed env file.
    pub fn from_env_file(file: &EnvFile) -> Result<Self, ConfigError> {
        let raw_url = file
            .get("ALERTA_API_ALERT_URL")
            .ok_or(ConfigError::MissingKey("ALERTA_API_ALERT_URL"))?;
        let url = Url::parse(raw_url).map_err(|e| ConfigError::InvalidValue {
            key: "ALERTA_API_ALERT_URL",
            reason: e.to_string(),
        })?;
        let api_key = file.get("ALERTA_API_KEY").filter(|k| !k.is_empty()).map(str::to_string);
        let environment = file.get_or("ALERTA_ENVIRONMENT", "production").to_string();
        Ok(Self { url, api_key, environment })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_full_configuration() {
        let file = EnvFile::parse(
            "ALERTA_API_ALERT_URL=\"http://alerta.example.com/api/alert\"\n\
             ALERTA_API_KEY=secret\n\
             ALERTA_ENVIRONMENT=staging\n",
        );
        let config = AlertaConfig::from_env_file(&file).unwrap();
        assert_eq!(config.url.as_str(), "http://alerta.example.com/api/alert");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.environment, "staging");
    }

    #[test]
    fn environment_defaults_to_production_and_key_is_optional() {
        let file = EnvFile::parse("ALERTA_API_ALERT_URL=http://alerta.example.com/api/alert\n");
        let config = AlertaConfig::from_env_file(&file).unwrap();
        assert_eq!(config.api_key, None);
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn missing_url_is_fatal() {
        let file = EnvFile::parse("ALERTA_ENVIRONMENT=production\n");
        let result = AlertaConfig::from_env_file(&file);
        assert!(matches!(result, Err(ConfigError::MissingKey("ALERTA_API_ALERT_URL"))));
    }

    #[test]
    fn invalid_url_is_rejected() {
        let file = EnvFile::parse("ALERTA_API_ALERT_URL=not a url\n");
        let result = AlertaConfig::from_env_file(&file);
        assert!(matches!(result, Err(ConfigError::InvalidValue { key: "ALERTA_API_ALERT_URL", .. })));
    }

    #[test]
    fn empty_api_key_counts_as_absent() {
        let file = EnvFile::parse(
            "ALERTA_API_ALERT_URL=http://alerta.example.com/api/alert\nALERTA_API_KEY=\n",
        );
        let config = AlertaConfig::from_env_file(&file).unwrap();
        assert_eq!(config.api_key, None);
    }
}
