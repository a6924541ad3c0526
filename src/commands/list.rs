//! Inventory listing handlers.

use anyhow::bail;
use clap::Parser;

use crate::client::ApiClient;
use crate::inventory::Inventory;

use super::parse_flags;

const SERVICES_USAGE: &str = "Usage: nagios-cli services <host>";

/// `hosts` takes no flags; the parser still runs so stray flag tokens
/// are rejected the same way as everywhere else.
#[derive(Parser, Debug)]
#[command(name = "hosts", no_binary_name = true)]
struct HostsFlags {
    // Non-flag tokens inside the flag group are tolerated and ignored.
    #[arg(hide = true)]
    #[allow(dead_code)]
    rest: Vec<String>,
}

#[derive(Parser, Debug)]
#[command(name = "services", no_binary_name = true)]
struct ServicesFlags {
    #[arg(hide = true)]
    #[allow(dead_code)]
    rest: Vec<String>,
}

// ── Hosts ───────────────────────────────────────────────────────────

pub fn hosts(
    _client: &ApiClient,
    inventory: &Inventory,
    _positionals: &[String],
    flag_args: &[String],
) -> anyhow::Result<()> {
    let Some(_flags) = parse_flags::<HostsFlags>(flag_args)? else {
        return Ok(());
    };
    for host in inventory.hosts() {
        println!("{host}");
    }
    Ok(())
}

// ── Services ────────────────────────────────────────────────────────

pub fn services(
    _client: &ApiClient,
    inventory: &Inventory,
    positionals: &[String],
    flag_args: &[String],
) -> anyhow::Result<()> {
    let Some(_flags) = parse_flags::<ServicesFlags>(flag_args)? else {
        return Ok(());
    };
    let Some(host) = positionals.first() else {
        bail!("Missing host\n{SERVICES_USAGE}");
    };
    let Some(services) = inventory.services(host) else {
        bail!("Unknown host: {host}");
    };
    for service in services {
        println!("{service}");
    }
    Ok(())
}
