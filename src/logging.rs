// src/logging.rs

//! Logging setup for `dirnotify` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining what gets logged:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `DIRNOTIFY_LOG` environment variable, either a bare level ("debug")
//!    or full `EnvFilter` directives ("dirnotify::watch::decode=trace")
//! 3. default to `info`
//!
//! A bare level applies to the `dirnotify` target only; everything else
//! stays at `warn`. Logs go to STDERR; STDOUT carries one line per event.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

/// Environment variable consulted when `--log-level` is absent.
pub const LOG_ENV: &str = "DIRNOTIFY_LOG";

/// Target prefix of every event this crate logs.
pub const LOG_TARGET: &str = "dirnotify";

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_value = std::env::var(LOG_ENV).ok();
    let filter = build_filter(cli_level, env_value.as_deref())?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Resolve the filter from the CLI level and the raw `DIRNOTIFY_LOG` value.
pub fn build_filter(cli_level: Option<LogLevel>, env_value: Option<&str>) -> Result<EnvFilter> {
    let directives = match (cli_level, env_value) {
        (Some(lvl), _) => scoped_directives(level_from_log_level(lvl)),
        (None, Some(raw)) => match parse_level_str(raw) {
            Some(level) => scoped_directives(level),
            None => raw.trim().to_string(),
        },
        (None, None) => scoped_directives(tracing::Level::INFO),
    };

    EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid {LOG_ENV} directives: {directives:?}"))
}

fn scoped_directives(level: tracing::Level) -> String {
    format!("warn,{LOG_TARGET}={}", level_name(level))
}

fn level_name(level: tracing::Level) -> &'static str {
    match level {
        tracing::Level::ERROR => "error",
        tracing::Level::WARN => "warn",
        tracing::Level::INFO => "info",
        tracing::Level::DEBUG => "debug",
        tracing::Level::TRACE => "trace",
    }
}

fn level_from_log_level(lvl: LogLevel) -> tracing::Level {
    match lvl {
        LogLevel::Error => tracing::Level::ERROR,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Trace => tracing::Level::TRACE,
    }
}

/// Parse a bare level name as accepted in `DIRNOTIFY_LOG`.
pub fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
