//! Alert gateway adapter: serializes a run result into a JSON alert and
//! posts it to the configured HTTP endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use super::{error::NotifierError, traits::Notifier};
use crate::{
    config::AlertaConfig,
    models::{CheckEvent, Delivery, Severity},
};

/// The fixed JSON object posted for every alert.
#[derive(Debug, Serialize)]
pub struct AlertPayload {
    /// Full run output.
    pub text: String,
    /// Host the check ran on.
    pub resource: String,
    /// Check identifier.
    pub event: String,
    /// Deployment environment label.
    pub environment: String,
    /// Severity derived from the exit code.
    pub severity: Severity,
    /// Raw exit code string.
    pub value: String,
    /// Affected services; always the single host.
    pub service: Vec<String>,
    /// Fixed origin marker.
    pub origin: &'static str,
    /// Fixed alert type marker.
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl AlertPayload {
    /// Builds the payload for one check event.
    pub fn new(config: &AlertaConfig, event: &CheckEvent) -> Self {
        Self {
            text: event.output.clone(),
            resource: event.hostname.clone(),
            event: event.check_id.clone(),
            environment: config.environment.clone(),
            severity: Severity::from_exit_code(&event.exit_code),
            value: event.exit_code.clone(),
            service: vec![event.hostname.clone()],
            origin: "checker",
            kind: "checkerCheck",
        }
    }
}

/// In-process notifier posting alerts to the HTTP alert gateway.
pub struct AlertaNotifier {
    config: AlertaConfig,
    client: reqwest::Client,
}

impl AlertaNotifier {
    /// Creates a notifier for the given gateway configuration.
    ///
    /// The client carries a connect timeout and nothing else; failed requests
    /// are never retried here, re-delivery belongs to the next scheduler
    /// cycle.
    pub fn new(config: AlertaConfig) -> Result<Self, NotifierError> {
        let client =
            reqwest::Client::builder().connect_timeout(Duration::from_secs(10)).build()?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl Notifier for AlertaNotifier {
    fn id(&self) -> String {
        "alerta".to_string()
    }

    async fn notify(&self, event: &CheckEvent) -> Result<Delivery, NotifierError> {
        let payload = AlertPayload::new(&self.config, event);
        tracing::debug!(event = %payload.event, severity = %payload.severity, "posting alert");

        let mut request = self.client.post(self.config.url.clone()).json(&payload);
        if let Some(key) = &self.config.api_key {
            request = request.header("Authorization", format!("Key {key}"));
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_client_error() || status.is_server_error() {
            return Err(NotifierError::Gateway(format!("HTTP {status}: {body}")));
        }
        Ok(Delivery::message(body))
    }
}
