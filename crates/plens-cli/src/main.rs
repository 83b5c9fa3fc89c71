//! Process Lens CLI.

use clap::{ColorChoice, Parser};
use plens_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_info, run_mine};
use crate::summary::{print_log_summary, print_mine_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Mine(args) => match run_mine(&args) {
            Ok(summary) => {
                print_mine_summary(&summary);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Info(args) => match run_info(&args) {
            Ok(summary) => {
                print_log_summary(&summary);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent
/// precedence: explicit `--log-level` wins over `-v`/`-q`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level = match cli.log_level {
        Some(LogLevelArg::Error) => tracing::Level::ERROR,
        Some(LogLevelArg::Warn) => tracing::Level::WARN,
        Some(LogLevelArg::Info) => tracing::Level::INFO,
        Some(LogLevelArg::Debug) => tracing::Level::DEBUG,
        Some(LogLevelArg::Trace) => tracing::Level::TRACE,
        None => match cli.verbosity.tracing_level_filter() {
            LevelFilter::OFF | LevelFilter::ERROR => tracing::Level::ERROR,
            LevelFilter::WARN => tracing::Level::WARN,
            LevelFilter::INFO => tracing::Level::INFO,
            LevelFilter::DEBUG => tracing::Level::DEBUG,
            LevelFilter::TRACE => tracing::Level::TRACE,
        },
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level,
        with_ansi,
        format,
        log_file: cli.log_file.clone(),
        ..LogConfig::default()
    }
}
