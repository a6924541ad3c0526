//! Subcommand dispatch.
//!
//! The dispatcher owns the explicit command table, prefix-based name
//! resolution, and the positional/flag split. Each handler then parses
//! its own flag group with a dedicated clap parser.

use anyhow::bail;

use crate::client::ApiClient;
use crate::inventory::Inventory;

mod downtime;
mod list;
mod raw;

pub use raw::raw;

/// Command listing shown in usage errors and under `--help`.
pub const USAGE: &str = "\
Commands:
  hosts                                          List every known host
  services <host>                                List the services on a host
  schedule-downtime <host> [service] <duration>  Schedule downtime for a host or service
  cancel-downtime <host> [service]               Cancel downtime for a host or service

Command names may be abbreviated to any unambiguous prefix.";

type Handler = fn(&ApiClient, &Inventory, &[String], &[String]) -> anyhow::Result<()>;

#[derive(Debug)]
struct Command {
    name: &'static str,
    run: Handler,
}

const COMMANDS: &[Command] = &[
    Command {
        name: "hosts",
        run: list::hosts,
    },
    Command {
        name: "services",
        run: list::services,
    },
    Command {
        name: "schedule-downtime",
        run: downtime::schedule,
    },
    Command {
        name: "cancel-downtime",
        run: downtime::cancel,
    },
];

/// Resolve the subcommand name, split its arguments, and run it.
pub fn dispatch(client: &ApiClient, inventory: &Inventory, args: &[String]) -> anyhow::Result<()> {
    let Some((name, rest)) = args.split_first() else {
        bail!("No command given\n{USAGE}");
    };
    let command = resolve(name)?;
    let (positionals, flags) = split_args(rest);
    (command.run)(client, inventory, positionals, flags)
}

/// Match a possibly abbreviated name against the command table. Zero or
/// multiple prefix matches are usage errors, reported in table order.
fn resolve(name: &str) -> anyhow::Result<&'static Command> {
    let matches: Vec<&Command> = COMMANDS
        .iter()
        .filter(|command| command.name.starts_with(name))
        .collect();
    match matches.as_slice() {
        [command] => Ok(*command),
        [] => bail!("Unknown command: {name}\n{USAGE}"),
        candidates => {
            let names: Vec<&str> = candidates.iter().map(|c| c.name).collect();
            bail!("Ambiguous command '{name}' (matches: {})", names.join(", "));
        }
    }
}

/// Split subcommand arguments into positionals and the flag group.
///
/// The first dash-prefixed token starts the flag group, and everything
/// after it belongs to the flag group too, dash or not. Downstream
/// scripts rely on this exact grouping.
fn split_args(args: &[String]) -> (&[String], &[String]) {
    let cut = args
        .iter()
        .position(|arg| arg.starts_with('-'))
        .unwrap_or(args.len());
    args.split_at(cut)
}

/// Run a subcommand's clap parser over its flag group.
///
/// `Ok(None)` means a help request was printed to stdout and the handler
/// should finish successfully without doing anything.
fn parse_flags<T: clap::Parser>(flags: &[String]) -> anyhow::Result<Option<T>> {
    match T::try_parse_from(flags) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) if e.kind() == clap::error::ErrorKind::DisplayHelp => {
            print!("{e}");
            Ok(None)
        }
        Err(e) => bail!("{}", e.to_string().trim_end()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    // ── Prefix resolution ───────────────────────────────────────────

    #[test]
    fn exact_names_resolve() {
        assert_eq!(resolve("hosts").unwrap().name, "hosts");
        assert_eq!(resolve("cancel-downtime").unwrap().name, "cancel-downtime");
    }

    #[test]
    fn unambiguous_prefixes_resolve() {
        assert_eq!(resolve("host").unwrap().name, "hosts");
        assert_eq!(resolve("sch").unwrap().name, "schedule-downtime");
        assert_eq!(resolve("c").unwrap().name, "cancel-downtime");
    }

    #[test]
    fn ambiguous_prefix_is_an_error() {
        let err = resolve("s").unwrap_err().to_string();
        assert!(err.contains("Ambiguous command 's'"), "err: {err}");
        assert!(err.contains("services"), "err: {err}");
        assert!(err.contains("schedule-downtime"), "err: {err}");
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = resolve("bogus").unwrap_err().to_string();
        assert!(err.contains("Unknown command: bogus"), "err: {err}");
    }

    #[test]
    fn ambiguity_reporting_follows_table_order() {
        let err = resolve("s").unwrap_err().to_string();
        let services = err.find("services").unwrap();
        let schedule = err.find("schedule-downtime").unwrap();
        assert!(services < schedule, "err: {err}");
    }

    // ── Sticky positional/flag split ────────────────────────────────

    #[test]
    fn no_dash_tokens_means_all_positional() {
        let args = strings(&["web01", "2h"]);
        let (positionals, flags) = split_args(&args);
        assert_eq!(positionals, ["web01", "2h"]);
        assert!(flags.is_empty());
    }

    #[test]
    fn first_dash_token_starts_the_flag_group() {
        let args = strings(&["web01", "2h", "--author=ops"]);
        let (positionals, flags) = split_args(&args);
        assert_eq!(positionals, ["web01", "2h"]);
        assert_eq!(flags, ["--author=ops"]);
    }

    #[test]
    fn flag_group_is_sticky_for_later_positionals() {
        let args = strings(&["web01", "-r", "2h"]);
        let (positionals, flags) = split_args(&args);
        assert_eq!(positionals, ["web01"]);
        assert_eq!(flags, ["-r", "2h"]);
    }

    #[test]
    fn leading_dash_token_means_no_positionals() {
        let args = strings(&["--author=ops", "web01"]);
        let (positionals, flags) = split_args(&args);
        assert!(positionals.is_empty());
        assert_eq!(flags, ["--author=ops", "web01"]);
    }

    #[test]
    fn empty_args_split_empty() {
        let (positionals, flags) = split_args(&[]);
        assert!(positionals.is_empty());
        assert!(flags.is_empty());
    }

    // ── Flag-group parsing ──────────────────────────────────────────

    #[derive(clap::Parser, Debug)]
    #[command(name = "sample", no_binary_name = true)]
    struct SampleFlags {
        #[arg(short, long)]
        force: bool,
    }

    #[test]
    fn help_request_parses_to_none() {
        let parsed = parse_flags::<SampleFlags>(&strings(&["-h"])).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn parsed_flags_come_back_as_some() {
        let parsed = parse_flags::<SampleFlags>(&strings(&["--force"])).unwrap();
        assert!(parsed.is_some_and(|flags| flags.force));
    }
}
