//! nagios-cli: command-line client for the nagios-api JSON HTTP interface.

mod cli;
mod client;
mod commands;
mod duration;
mod inventory;
mod protocol;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::client::ApiClient;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(1)
        }
    }
}

/// One inventory fetch, then at most one command-specific API call.
///
/// The fetch happens before subcommand resolution, raw mode included, so
/// a bad command name still reports an unreachable server first.
fn run(cli: &Cli) -> anyhow::Result<()> {
    let client = ApiClient::new(&cli.endpoint());

    let inventory = client.objects()?;
    tracing::debug!(hosts = inventory.host_count(), "inventory fetched");

    if cli.raw {
        commands::raw(&client, &cli.args)
    } else {
        commands::dispatch(&client, &inventory, &cli.args)
    }
}

/// Diagnostics go to stderr and stay off unless RUST_LOG asks for them;
/// stdout belongs to command output alone.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
