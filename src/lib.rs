// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod watch;

use std::thread;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{default_config_path, load_from_path, ConfigFile, RawConfigFile};
pub use crate::watch::{Event, EventKind, ListenOutcome, Notifier, NotifierOptions};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config resolution (file + CLI overrides)
/// - the notifier on the configured directory
/// - the listen loop, printing one line per event to stdout
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = resolve_config(&args)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let options = NotifierOptions {
        mask: cfg.mask,
        blocking: cfg.blocking,
    };
    let mut notifier = Notifier::with_options(&cfg.path, |event: Event| println!("{event}"), options)
        .with_context(|| format!("opening inotify instance for {:?}", cfg.path))?;

    info!(path = ?notifier.path(), mask = %notifier.mask(), once = args.once, "listening");

    loop {
        match notifier.listen() {
            ListenOutcome::Dispatched(n) => debug!(events = n, "listen returned"),
            ListenOutcome::WouldBlock => {
                if !args.once {
                    thread::sleep(cfg.poll_interval);
                }
            }
            ListenOutcome::Failed(err) => {
                return Err(err).context("reading filesystem events");
            }
        }
        if args.once {
            break;
        }
    }

    Ok(())
}

/// Build the effective settings: config file first, then CLI flags on top.
///
/// An explicit `--config` must exist; the default `Dirnotify.toml` is only
/// read when present.
pub fn resolve_config(args: &CliArgs) -> errors::Result<ConfigFile> {
    let mut raw = match args.config.as_deref() {
        Some(path) => load_from_path(path)?,
        None => {
            let path = default_config_path();
            if path.is_file() {
                load_from_path(&path)?
            } else {
                RawConfigFile::default()
            }
        }
    };

    apply_overrides(&mut raw, args);
    ConfigFile::try_from(raw)
}

fn apply_overrides(raw: &mut RawConfigFile, args: &CliArgs) {
    if let Some(ref path) = args.path {
        raw.watch.path = Some(path.clone());
    }
    if let Some(ref events) = args.events {
        raw.watch.events = EventKind::split_list(events)
            .map(str::to_string)
            .collect();
    }
    if args.non_blocking {
        raw.watch.blocking = false;
    }
    if let Some(ms) = args.poll_interval_ms {
        raw.watch.poll_interval_ms = ms;
    }
}

/// Simple dry-run output: print the resolved watch settings.
fn print_dry_run(cfg: &ConfigFile) {
    println!("dirnotify dry-run");
    println!("  path = {:?}", cfg.path);
    println!("  reported path = {:?}", watch::clear_path(&cfg.path));
    println!("  events = {}", cfg.mask);
    println!("  blocking = {}", cfg.blocking);
    if !cfg.blocking {
        println!("  poll_interval = {:?}", cfg.poll_interval);
    }

    debug!("dry-run complete (nothing watched)");
}
