// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::watch::EventKind;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [watch]
/// path = "incoming"
/// events = ["create", "delete", "modify"]
/// blocking = true
/// poll_interval_ms = 100
/// ```
///
/// Every key is optional; `path` must still be supplied either here or on the
/// command line before the config validates.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub watch: WatchSection,
}

/// `[watch]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchSection {
    /// Directory to watch.
    #[serde(default)]
    pub path: Option<String>,

    /// Event kind names making up the watch mask.
    #[serde(default = "default_events")]
    pub events: Vec<String>,

    /// Block in `listen` until events arrive.
    #[serde(default = "default_blocking")]
    pub blocking: bool,

    /// Sleep between polls when `blocking = false`.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_events() -> Vec<String> {
    vec![
        "CREATE".to_string(),
        "DELETE".to_string(),
        "MODIFY".to_string(),
    ]
}

fn default_blocking() -> bool {
    true
}

fn default_poll_interval_ms() -> u64 {
    100
}

impl Default for WatchSection {
    fn default() -> Self {
        Self {
            path: None,
            events: default_events(),
            blocking: default_blocking(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

/// Validated settings, ready to build a notifier from.
///
/// Only obtainable through `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub mask: EventKind,
    pub blocking: bool,
    pub poll_interval: Duration,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        path: PathBuf,
        mask: EventKind,
        blocking: bool,
        poll_interval: Duration,
    ) -> Self {
        Self {
            path,
            mask,
            blocking,
            poll_interval,
        }
    }
}
