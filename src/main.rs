//! Checker command-line interface.

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use checker::cmd::{self, NotifyAlertaArgs, NotifyArgs, NotifyEmailArgs, RecordArgs};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs the check command and records its output into a run file.
    Record(RecordArgs),
    /// Fans a recorded run out to every registered notifier.
    Notify(NotifyArgs),
    /// Posts a run result to the HTTP alert gateway.
    NotifyAlerta(NotifyAlertaArgs),
    /// Emails a run result to the configured recipient.
    NotifyEmail(NotifyEmailArgs),
}

#[tokio::main]
async fn main() {
    // Operator diagnostics go to stderr; stdout belongs to recorded and
    // forwarded check output.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Record(args) => cmd::record::execute(args).await,
        Commands::Notify(args) => cmd::notify::execute(args).await,
        Commands::NotifyAlerta(args) => cmd::notify_alerta::execute(args).await,
        Commands::NotifyEmail(args) => cmd::notify_email::execute(args).await,
    };

    std::process::exit(code);
}
