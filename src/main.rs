//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use sleeper_api::{
    cli::{Commands, Sleeper},
    commands::handle_get,
    CancellationToken, SleeperClient,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so JSON on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "sleeper_api=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Sleeper::parse();
    init_tracing(app.verbose);

    let cancel = CancellationToken::new();
    let client = SleeperClient::with_config(app.client_config())
        .context("building Sleeper client")?
        .with_cancellation(cancel.clone());

    // Ctrl-C aborts the in-flight request instead of killing the process mid-write
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupt received, cancelling request");
                cancel.cancel();
            }
        }
    });

    match app.command {
        Commands::Get { cmd } => handle_get(&client, cmd).await?,
    }

    Ok(())
}
