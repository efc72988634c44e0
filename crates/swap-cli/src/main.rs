//! Binary entry point: parse arguments, set up logging, run the command.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::{ColorChoice, Parser};

use swap_cli::cli::{Cli, Command, LogFormatArg};
use swap_cli::commands::{run_columns, run_history};
use swap_cli::logging::{LogConfig, LogFormat, init_logging};
use swap_cli::summary::print_summary;

/// Exit code for pre-flight validation failures, distinguishable from
/// mid-pipeline errors in scripts.
const EXIT_VALIDATION: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();

    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }

    match cli.command {
        Command::History(args) => match run_history(&args) {
            Ok(report) => {
                print_summary(&report);
                ExitCode::SUCCESS
            }
            Err(error) => {
                eprintln!("error: {error}");
                if error.is_validation() {
                    ExitCode::from(EXIT_VALIDATION)
                } else {
                    ExitCode::FAILURE
                }
            }
        },
        Command::Columns => {
            run_columns();
            ExitCode::SUCCESS
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence:
/// explicit verbosity flags beat `RUST_LOG`, which beats the default.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
