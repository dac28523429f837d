//! `checker notify-email`: email one run result to the configured recipient.

use std::sync::Arc;

use clap::Args;
use tokio::io::AsyncReadExt;

use crate::{
    config::{EmailConfig, paths},
    models::CheckEvent,
    notifiers::{EmailNotifier, MailCommand, Notifier},
    ratelimit::FileRateLimitStore,
};

/// Arguments for the `notify-email` subcommand.
#[derive(Args, Debug)]
pub struct NotifyEmailArgs {
    /// Host the check ran on.
    pub hostname: String,
    /// Name of the check definition.
    pub check_name: String,
    /// Status code of the check run (`0`..`3`, anything else is unknown).
    pub status: String,
}

/// Reads the run output from stdin and sends the email, returning the
/// process exit code. Gating and rate-limit suppression are success.
pub async fn execute(args: NotifyEmailArgs) -> i32 {
    let config = match EmailConfig::load(&paths::email_config_file()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let mut output = String::new();
    if let Err(e) = tokio::io::stdin().read_to_string(&mut output).await {
        eprintln!("Error reading check output from stdin: {e}");
        return 1;
    }

    let store = Arc::new(FileRateLimitStore::new(paths::runtime_dir()));
    let notifier = EmailNotifier::new(config, store, Arc::new(MailCommand::new()));

    let event = CheckEvent {
        hostname: args.hostname,
        check_id: args.check_name,
        exit_code: args.status,
        output,
    };

    match notifier.notify(&event).await {
        Ok(delivery) => {
            if !delivery.stdout.is_empty() {
                println!("{}", delivery.stdout);
            }
            0
        }
        Err(e) => {
            eprintln!("{e}");
            1
        }
    }
}
