// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dirnotify`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "dirnotify",
    version,
    about = "Print filesystem events for a single directory (Linux inotify).",
    long_about = None
)]
pub struct CliArgs {
    /// Directory to watch. Overrides `[watch].path` from the config file.
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Path to a config file (TOML).
    ///
    /// Without this flag, `Dirnotify.toml` in the current directory is read
    /// if it exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Event kinds to watch, e.g. `create,delete,modify`.
    #[arg(long, value_name = "LIST")]
    pub events: Option<String>,

    /// Open the notification handle in non-blocking mode and poll.
    #[arg(long)]
    pub non_blocking: bool,

    /// Perform a single read, print what it returned, and exit.
    #[arg(long)]
    pub once: bool,

    /// Delay between polls in non-blocking mode.
    #[arg(long, value_name = "MS")]
    pub poll_interval_ms: Option<u64>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DIRNOTIFY_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print the settings, but don't watch anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
