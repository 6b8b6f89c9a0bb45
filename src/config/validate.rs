// src/config/validate.rs

use std::path::PathBuf;
use std::time::Duration;

use crate::config::model::{ConfigFile, RawConfigFile, WatchSection};
use crate::errors::{DirnotifyError, Result};
use crate::watch::EventKind;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = DirnotifyError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        let watch = raw.watch;
        let path = validate_path(&watch)?;
        let mask = validate_events(&watch)?;
        validate_poll_interval(&watch)?;
        Ok(ConfigFile::new_unchecked(
            path,
            mask,
            watch.blocking,
            Duration::from_millis(watch.poll_interval_ms),
        ))
    }
}

fn validate_path(watch: &WatchSection) -> Result<PathBuf> {
    match watch.path.as_deref() {
        Some(p) if !p.is_empty() => Ok(PathBuf::from(p)),
        Some(_) => Err(DirnotifyError::ConfigError(
            "[watch].path must not be empty".to_string(),
        )),
        None => Err(DirnotifyError::ConfigError(
            "no directory to watch: set [watch].path or pass PATH".to_string(),
        )),
    }
}

fn validate_events(watch: &WatchSection) -> Result<EventKind> {
    let mut mask = EventKind::empty();
    for name in watch.events.iter() {
        mask |= EventKind::parse_name(name)
            .ok_or_else(|| DirnotifyError::UnknownEventKind(name.clone()))?;
    }
    if mask.is_empty() {
        return Err(DirnotifyError::ConfigError(
            "[watch].events must name at least one event kind".to_string(),
        ));
    }
    Ok(mask)
}

fn validate_poll_interval(watch: &WatchSection) -> Result<()> {
    if watch.poll_interval_ms == 0 {
        return Err(DirnotifyError::ConfigError(
            "[watch].poll_interval_ms must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}
