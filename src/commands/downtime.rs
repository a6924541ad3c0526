//! Downtime scheduling and cancellation handlers.

use anyhow::bail;
use clap::Parser;

use crate::client::ApiClient;
use crate::duration::parse_duration;
use crate::inventory::{Inventory, Selector};
use crate::protocol::{content_text, ApiResponse};

use super::parse_flags;

const SCHEDULE_USAGE: &str = "Usage: nagios-cli schedule-downtime <host> [service] <duration> \
[--recursive] [--author AUTHOR] [--comment COMMENT]";

#[derive(Parser, Debug)]
#[command(name = "schedule-downtime", no_binary_name = true)]
struct ScheduleFlags {
    /// Apply the downtime to the host's services as well
    #[arg(short, long)]
    recursive: bool,

    /// Author recorded on the downtime
    #[arg(short, long)]
    author: Option<String>,

    /// Comment recorded on the downtime
    #[arg(short, long)]
    comment: Option<String>,

    // Non-flag tokens inside the flag group are tolerated and ignored.
    #[arg(hide = true)]
    #[allow(dead_code)]
    rest: Vec<String>,
}

#[derive(Parser, Debug)]
#[command(name = "cancel-downtime", no_binary_name = true)]
struct CancelFlags {
    /// Cancel the downtime on the host's services as well
    #[arg(short, long)]
    recursive: bool,

    #[arg(hide = true)]
    #[allow(dead_code)]
    rest: Vec<String>,
}

// ── Schedule ────────────────────────────────────────────────────────

pub fn schedule(
    client: &ApiClient,
    inventory: &Inventory,
    positionals: &[String],
    flag_args: &[String],
) -> anyhow::Result<()> {
    let Some(flags) = parse_flags::<ScheduleFlags>(flag_args)? else {
        return Ok(());
    };
    let Some((selector, rest)) = Selector::resolve(inventory, positionals) else {
        bail!("No valid host/service found");
    };
    let Some(duration_arg) = rest.first() else {
        bail!("Missing duration\n{SCHEDULE_USAGE}");
    };
    let seconds = match parse_duration(duration_arg) {
        Ok(seconds) => seconds,
        Err(e) => bail!("{e}\n{SCHEDULE_USAGE}"),
    };

    let mut params = selector.params();
    params.insert("duration".into(), seconds.into());
    if flags.recursive {
        params.insert("services_too".into(), true.into());
    }
    if let Some(author) = flags.author {
        params.insert("author".into(), author.into());
    }
    if let Some(comment) = flags.comment {
        params.insert("comment".into(), comment.into());
    }

    check(client.request("schedule_downtime", params)?)
}

// ── Cancel ──────────────────────────────────────────────────────────

pub fn cancel(
    client: &ApiClient,
    inventory: &Inventory,
    positionals: &[String],
    flag_args: &[String],
) -> anyhow::Result<()> {
    let Some(flags) = parse_flags::<CancelFlags>(flag_args)? else {
        return Ok(());
    };
    let Some((selector, _rest)) = Selector::resolve(inventory, positionals) else {
        bail!("No valid host/service found");
    };

    let mut params = selector.params();
    if flags.recursive {
        params.insert("services_too".into(), true.into());
    }

    check(client.request("cancel_downtime", params)?)
}

/// Downtime verbs print nothing on success; a `success=false` envelope
/// becomes the one-line `Failed:` diagnostic.
fn check(resp: ApiResponse) -> anyhow::Result<()> {
    if resp.success {
        Ok(())
    } else {
        bail!("Failed: {}", content_text(&resp.content))
    }
}
