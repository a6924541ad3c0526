//! Global command-line flags and endpoint composition.
//!
//! Only `--host`, `--port` and `--raw` are parsed here, and only before
//! the subcommand name. Everything from the subcommand onward lands in
//! `args` untouched (including dash tokens) for the dispatcher to split.

use clap::Parser;

use crate::commands;

/// Default nagios-api port.
const DEFAULT_PORT: u16 = 6315;

#[derive(Parser, Debug)]
#[command(
    name = "nagios-cli",
    version,
    about = "Command-line client for the nagios-api monitoring control API",
    after_help = commands::USAGE
)]
pub struct Cli {
    /// Hostname of the nagios-api server
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Port of the nagios-api server
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Skip subcommand dispatch and pass arguments straight to the API
    #[arg(long)]
    pub raw: bool,

    /// Subcommand and its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Base URL of the remote API.
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
