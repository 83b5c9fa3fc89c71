//! CLI argument definitions for Process Lens.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "plens",
    version,
    about = "Process Lens - mine and render process dependency graphs",
    long_about = "Mine a dependency graph from a CSV event log and render it.\n\n\
                  The event log is a flat table with one row per event; the\n\
                  timestamp, case-id, and activity columns are named on the\n\
                  command line. Rendering goes through Graphviz (dot)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Mine a dependency graph from an event log and write the image.
    Mine(MineArgs),

    /// Ingest an event log and print activity statistics.
    Info(InfoArgs),
}

#[derive(Parser)]
pub struct ColumnArgs {
    /// Name of the timestamp column.
    #[arg(long = "time-col", value_name = "NAME", default_value = "timestamp")]
    pub time_col: String,

    /// Name of the case-id column.
    #[arg(long = "case-col", value_name = "NAME", default_value = "case")]
    pub case_col: String,

    /// Name of the activity column.
    #[arg(long = "event-col", value_name = "NAME", default_value = "activity")]
    pub event_col: String,
}

#[derive(Parser)]
pub struct MineArgs {
    /// Path to the CSV event log.
    #[arg(value_name = "EVENT_LOG")]
    pub event_log: PathBuf,

    #[command(flatten)]
    pub columns: ColumnArgs,

    /// Dependency-strength threshold, slider units 0-100 (maps to 0.00-1.00).
    #[arg(long = "threshold", value_name = "0-100", default_value_t = 50)]
    pub threshold: u8,

    /// Minimum activity/succession frequency.
    #[arg(long = "min-frequency", value_name = "N", default_value_t = 1)]
    pub min_frequency: u64,

    /// Image format to write.
    #[arg(long = "format", value_enum, default_value = "vector")]
    pub format: FormatArg,

    /// Output file (default: <EVENT_LOG stem>.svg or .png).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Graphviz executable to render with.
    #[arg(long = "renderer", value_name = "PROGRAM", default_value = "dot")]
    pub renderer: String,
}

#[derive(Parser)]
pub struct InfoArgs {
    /// Path to the CSV event log.
    #[arg(value_name = "EVENT_LOG")]
    pub event_log: PathBuf,

    #[command(flatten)]
    pub columns: ColumnArgs,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// PNG raster output.
    Raster,
    /// SVG vector output.
    Vector,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
