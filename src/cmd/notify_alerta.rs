//! `checker notify-alerta`: post one run result to the alert gateway.

use clap::Args;
use tokio::io::AsyncReadExt;

use crate::{
    config::{AlertaConfig, paths},
    models::CheckEvent,
    notifiers::{AlertaNotifier, Notifier},
};

/// Arguments for the `notify-alerta` subcommand.
#[derive(Args, Debug)]
pub struct NotifyAlertaArgs {
    /// Host the check ran on.
    pub hostname: String,
    /// Identifier of the check definition.
    pub check_id: String,
    /// Exit code of the check run.
    pub exit_code: String,
}

/// Reads the run output from stdin and posts the alert, returning the
/// process exit code.
pub async fn execute(args: NotifyAlertaArgs) -> i32 {
    let config = match AlertaConfig::load(&paths::alerta_config_file()) {
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

    let notifier = match AlertaNotifier::new(config) {
        Ok(notifier) => notifier,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let event = CheckEvent {
        hostname: args.hostname,
        check_id: args.check_id,
        exit_code: args.exit_code,
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
            eprintln!("Failed to send to Alerta: {e}");
            1
        }
    }
}
