//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "swap-report",
    version,
    about = "Generate dated CSV and PDF reports of a wallet's swap history"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Append logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch a wallet's swap history and render the CSV and PDF report.
    History(HistoryArgs),

    /// List the report columns.
    Columns,
}

#[derive(Parser)]
pub struct HistoryArgs {
    /// Wallet address, 42-byte prefixed hex.
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Report name used in output file names.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Window start, epoch seconds.
    #[arg(long, value_name = "EPOCH")]
    pub from: i64,

    /// Window end, epoch seconds; 0 means now.
    #[arg(long, value_name = "EPOCH", default_value_t = 0)]
    pub to: i64,

    /// Directory the CSV and PDF land in.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "out/swaps")]
    pub output_dir: PathBuf,

    /// Trade-history service endpoint.
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Decorative PNG logo placed on the report.
    #[arg(long, value_name = "PATH")]
    pub logo: Option<PathBuf>,

    /// Format row timestamps and file names in UTC instead of the local zone.
    #[arg(long)]
    pub utc: bool,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
