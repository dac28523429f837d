//! `checker notify`: fan a recorded run out to every registered notifier.

use std::{path::PathBuf, sync::Arc};

use clap::Args;

use crate::{
    config::{AlertaConfig, EmailConfig, paths},
    dispatcher::{DispatchError, FAILURE_SENTINEL, NotifierDispatcher, discover_scripts},
    models::{CheckEvent, NotifierInvocation, NotifierOutcome},
    notifiers::{
        AlertaNotifier, EmailNotifier, MailCommand, Notifier, NotifierError, ScriptNotifier,
    },
    ratelimit::FileRateLimitStore,
};

/// Environment variable carrying the check's exit code into the dispatcher.
pub const EXIT_STATUS_VAR: &str = "EXIT_STATUS";

/// Arguments for the `notify` subcommand.
#[derive(Args, Debug)]
pub struct NotifyArgs {
    /// Host the check ran on.
    pub hostname: String,
    /// Identifier of the check definition.
    pub check_id: String,
    /// Path of the run record to deliver.
    pub run_file: PathBuf,
}

/// Builds the notifier registry and dispatches the run record, returning the
/// aggregate exit code: 0 when every notifier succeeded (or none exist), the
/// failure sentinel otherwise.
pub async fn execute(args: NotifyArgs) -> i32 {
    let output = match std::fs::read_to_string(&args.run_file) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error reading run file {}: {e}", args.run_file.display());
            return 1;
        }
    };
    let exit_code = std::env::var(EXIT_STATUS_VAR).unwrap_or_else(|_| "0".to_string());

    let event = CheckEvent {
        hostname: args.hostname,
        check_id: args.check_id,
        exit_code,
        output,
    };

    let (notifiers, prefailed) = match build_registry() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    if notifiers.is_empty() && prefailed.is_empty() {
        println!("No executable notifier scripts found");
        return 0;
    }

    for invocation in &prefailed {
        report(invocation);
    }

    let dispatcher = NotifierDispatcher::new(notifiers);
    let summary = dispatcher.dispatch(event, report).await;

    if summary.all_succeeded() && prefailed.is_empty() { 0 } else { FAILURE_SENTINEL }
}

type Registry = (Vec<Arc<dyn Notifier>>, Vec<NotifierInvocation>);

/// Assembles the notifier table: discovered plugin scripts plus the
/// in-process adapters whose configuration files are present.
///
/// A present-but-unloadable built-in configuration is isolated as a failed
/// invocation so the remaining notifiers still run.
fn build_registry() -> Result<Registry, DispatchError> {
    let mut notifiers: Vec<Arc<dyn Notifier>> = Vec::new();
    let mut prefailed = Vec::new();

    for script in discover_scripts(&paths::notifier_dir(), paths::NOTIFIER_SUFFIX)? {
        notifiers.push(Arc::new(ScriptNotifier::new(script)));
    }

    let alerta_file = paths::alerta_config_file();
    if alerta_file.exists() {
        let loaded = AlertaConfig::load(&alerta_file)
            .map_err(NotifierError::from)
            .and_then(AlertaNotifier::new);
        match loaded {
            Ok(notifier) => notifiers.push(Arc::new(notifier)),
            Err(e) => prefailed.push(NotifierInvocation::failed_early("alerta", e.to_string())),
        }
    }

    let email_file = paths::email_config_file();
    if email_file.exists() {
        match EmailConfig::load(&email_file) {
            Ok(config) => {
                let store = Arc::new(FileRateLimitStore::new(paths::runtime_dir()));
                let transport = Arc::new(MailCommand::new());
                notifiers.push(Arc::new(EmailNotifier::new(config, store, transport)));
            }
            Err(e) => prefailed.push(NotifierInvocation::failed_early("email", e.to_string())),
        }
    }

    Ok((notifiers, prefailed))
}

/// Prints one notifier's captured output and outcome for the operator.
fn report(invocation: &NotifierInvocation) {
    if !invocation.stdout.is_empty() {
        print!("{}", invocation.stdout);
        if !invocation.stdout.ends_with('\n') {
            println!();
        }
    }
    if !invocation.stderr.is_empty() {
        eprint!("{}", invocation.stderr);
        if !invocation.stderr.ends_with('\n') {
            eprintln!();
        }
    }
    match &invocation.outcome {
        NotifierOutcome::Success => {
            tracing::info!(notifier = %invocation.notifier_id, "notifier succeeded");
        }
        NotifierOutcome::Failure(code) => {
            println!("A notifier ({}) failed with exit code {}", invocation.notifier_id, code);
        }
        NotifierOutcome::Error(message) => {
            eprintln!("Error running notifier {}: {}", invocation.notifier_id, message);
        }
    }
}
