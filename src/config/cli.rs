//! Command-line interface definition.

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{DEFAULT_BIND_ADDR, DEFAULT_TIMEOUT_SECS};
use crate::config::types::{LogFormat, LogLevel};

/// Reports which security response headers a site sends or omits.
#[derive(Debug, Parser)]
#[command(name = "sec_headers", version, about)]
pub struct Cli {
    /// Log level (overrides RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check a single domain or URL and print the report
    Check(CheckArgs),
    /// Serve the web form and JSON API
    Serve(ServeArgs),
}

/// Arguments for `sec_headers check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Domain or URL to check, e.g. example.com or https://example.com
    pub target: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, env = "SEC_HEADERS_TIMEOUT")]
    pub timeout: u64,

    /// Print the report as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `sec_headers serve`.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_BIND_ADDR, env = "SEC_HEADERS_BIND")]
    pub bind: String,

    /// Request timeout in seconds for each check
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, env = "SEC_HEADERS_TIMEOUT")]
    pub timeout: u64,
}
