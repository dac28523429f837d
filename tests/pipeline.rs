//! End-to-end pipeline test: a critical check run is recorded, then fanned
//! out to the email and alert gateway notifiers.

use std::{
    os::unix::fs::PermissionsExt,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use checker::{
    config::{AlertaConfig, EmailConfig},
    dispatcher::NotifierDispatcher,
    models::{CheckEvent, RunRecord},
    notifiers::{AlertaNotifier, EmailNotifier, MailMessage, MailTransport, Notifier, NotifierError},
    ratelimit::FileRateLimitStore,
    recorder::RunRecorder,
};
use serde_json::json;

/// Transport double that records every message instead of sending it.
#[derive(Default)]
struct CapturingTransport {
    sent: Mutex<Vec<MailMessage>>,
}

#[async_trait]
impl MailTransport for CapturingTransport {
    async fn send(&self, message: &MailMessage) -> Result<(), NotifierError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

fn write_script(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[tokio::test]
async fn critical_check_flows_to_both_notifiers() {
    let dir = tempfile::tempdir().unwrap();

    // 1. Record: the check exits 2 with "disk full".
    let check = write_script(&dir, "check.sh", "echo disk full\nexit 2");
    let run_file = dir.path().join("disk.out");
    let code = RunRecorder::new(&run_file, &check).run().await.unwrap();
    assert_eq!(code, 2);

    let record = RunRecord::load(&run_file).unwrap();
    assert_eq!(record.exit_code, Some(2));

    // 2. The alert gateway expects a critical severity alert.
    let mut server = mockito::Server::new_async().await;
    let alert_mock = server
        .mock("POST", "/api/alert")
        .match_body(mockito::Matcher::PartialJson(json!({
            "resource": "web01",
            "event": "disk",
            "severity": "critical",
            "value": "2",
            "origin": "checker",
            "type": "checkerCheck",
        })))
        .with_status(201)
        .with_body(r#"{"status":"ok"}"#)
        .create_async()
        .await;

    let alerta = AlertaNotifier::new(AlertaConfig {
        url: url::Url::parse(&format!("{}/api/alert", server.url())).unwrap(),
        api_key: None,
        environment: "production".to_string(),
    })
    .unwrap();

    // 3. Email: critical notifications enabled, under the rate limit.
    let transport = Arc::new(CapturingTransport::default());
    let email = EmailNotifier::new(
        EmailConfig::default(),
        Arc::new(FileRateLimitStore::new(dir.path().join("runtime"))),
        Arc::clone(&transport) as Arc<dyn MailTransport>,
    );

    // 4. Dispatch the recorded run to both.
    let event = CheckEvent {
        hostname: "web01".to_string(),
        check_id: "disk".to_string(),
        exit_code: record.exit_code.unwrap().to_string(),
        output: record.raw.clone(),
    };
    let dispatcher = NotifierDispatcher::new(vec![
        Arc::new(alerta) as Arc<dyn Notifier>,
        Arc::new(email) as Arc<dyn Notifier>,
    ]);
    let summary = dispatcher.dispatch(event, |_| {}).await;

    assert_eq!(summary.exit_code(), 0, "both notifiers should succeed: {:?}", summary);
    alert_mock.assert_async().await;

    let sent = transport.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "[Checker] CRITICAL: disk on web01");
    assert!(sent[0].body.contains("disk full"));
}

#[tokio::test]
async fn rate_limited_email_still_counts_as_success() {
    let dir = tempfile::tempdir().unwrap();
    let transport = Arc::new(CapturingTransport::default());
    let store = Arc::new(FileRateLimitStore::new(dir.path().join("runtime")));
    let config = EmailConfig { rate_limit: 1, ..EmailConfig::default() };
    let email = EmailNotifier::new(config, store, Arc::clone(&transport) as Arc<dyn MailTransport>);

    let event = CheckEvent {
        hostname: "web01".to_string(),
        check_id: "disk".to_string(),
        exit_code: "2".to_string(),
        output: "disk full\n".to_string(),
    };

    // The first send is admitted; the second is suppressed but still
    // succeeds.
    let first = email.notify(&event).await.unwrap();
    assert_eq!(first.exit_code, 0);
    let second = email.notify(&event).await.unwrap();
    assert_eq!(second.exit_code, 0);
    assert!(second.stdout.contains("Rate limit exceeded for disk"));

    assert_eq!(transport.sent.lock().unwrap().len(), 1);
}
