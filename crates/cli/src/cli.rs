//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Legsync - leg sensor recording to event log converter
#[derive(Parser, Debug)]
#[command(
    name = "legsync",
    author,
    version,
    about = "Convert multi-channel leg sensor recordings into a replayable event log",
    long_about = "Converts an offline recording of heterogeneous leg sensor channels \n\
                  (motion-capture ground truth, contact forces, leg state, IMU) into \n\
                  one strictly time-ordered binary event log for deterministic replay."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "LEGSYNC_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "LEGSYNC_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the conversion
    Run(RunArgs),

    /// Validate configuration file without converting
    Validate(ValidateArgs),

    /// Display configuration and recording information
    Info(InfoArgs),
}

/// Arguments for the `run` command
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Path to configuration file (TOML or JSON)
    #[arg(short, long, default_value = "convert.toml", env = "LEGSYNC_CONFIG")]
    pub config: PathBuf,

    /// Override source recording path from configuration
    #[arg(long, env = "LEGSYNC_SOURCE")]
    pub source: Option<PathBuf>,

    /// Override output log path from configuration
    #[arg(long, env = "LEGSYNC_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Validate configuration and recording, then exit without writing
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, default_value = "convert.toml")]
    pub config: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "convert.toml")]
    pub config: PathBuf,

    /// Also read the recording and show per-channel sample counts
    #[arg(long)]
    pub samples: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Log output format
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum LogFormat {
    /// Human-readable multi-line format
    Pretty,
    /// Single-line compact format
    Compact,
    /// Structured JSON logs
    Json,
}
