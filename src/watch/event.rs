// src/watch/event.rs

//! Event values handed to the notifier callback.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use bitflags::bitflags;

use crate::errors::DirnotifyError;

bitflags! {
    /// Kind of filesystem change, using the kernel's inotify bit values.
    ///
    /// A value built from a raw record keeps every bit the kernel set, so
    /// combined masks (e.g. `CREATE` plus `IN_ISDIR`) and bits outside the
    /// fifteen named kinds survive untouched.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EventKind: u32 {
        const ACCESS = 0x0000_0001;
        const MODIFY = 0x0000_0002;
        const ATTRIB = 0x0000_0004;
        const CLOSE_WRITE = 0x0000_0008;
        const CLOSE_NOWRITE = 0x0000_0010;
        const OPEN = 0x0000_0020;
        const MOVED_FROM = 0x0000_0040;
        const MOVED_TO = 0x0000_0080;
        const CREATE = 0x0000_0100;
        const DELETE = 0x0000_0200;
        const DELETE_SELF = 0x0000_0400;
        const MOVE_SELF = 0x0000_0800;
        const UNMOUNT = 0x0000_2000;
        const Q_OVERFLOW = 0x0000_4000;
        const IGNORED = 0x0000_8000;
    }
}

impl EventKind {
    /// Mask registered when the caller does not choose one.
    pub const DEFAULT_WATCH: EventKind = EventKind::CREATE
        .union(EventKind::DELETE)
        .union(EventKind::MODIFY);

    /// Reinterpret a raw record mask. Never fails; unknown bits are kept.
    pub fn from_raw(mask: u32) -> Self {
        Self::from_bits_retain(mask)
    }

    /// Look up a single kind by name.
    ///
    /// Matching is case-insensitive and accepts an optional `IN_` prefix, so
    /// `"create"`, `"CREATE"` and `"IN_CREATE"` are all the same kind.
    pub fn parse_name(name: &str) -> Option<Self> {
        let upper = name.trim().to_ascii_uppercase();
        let bare = upper.strip_prefix("IN_").unwrap_or(&upper);
        Self::all()
            .iter_names()
            .find(|(flag_name, _)| *flag_name == bare)
            .map(|(_, kind)| kind)
    }

    /// Split a list such as `"create, delete|modify"` into trimmed names.
    pub fn split_list(list: &str) -> impl Iterator<Item = &str> {
        list.split([',', '|']).map(str::trim).filter(|s| !s.is_empty())
    }

    /// Parse a list such as `"create,delete"` or `"CREATE|MODIFY"` into a mask.
    pub fn parse_list(list: &str) -> Result<Self, DirnotifyError> {
        let mut mask = EventKind::empty();
        for part in Self::split_list(list) {
            let kind = Self::parse_name(part)
                .ok_or_else(|| DirnotifyError::UnknownEventKind(part.to_string()))?;
            mask |= kind;
        }
        Ok(mask)
    }

    /// Bits that do not belong to any named kind.
    pub fn unknown_bits(self) -> u32 {
        self.bits() & !Self::all().bits()
    }
}

impl Default for EventKind {
    fn default() -> Self {
        Self::DEFAULT_WATCH
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, _) in self.iter_names() {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(name)?;
            first = false;
        }
        let rest = self.unknown_bits();
        if rest != 0 {
            if !first {
                f.write_str("|")?;
            }
            write!(f, "{rest:#x}")?;
            first = false;
        }
        if first {
            f.write_str("0x0")?;
        }
        Ok(())
    }
}

impl FromStr for EventKind {
    type Err = DirnotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_list(s)
    }
}

/// One decoded notification, passed by value to the callback.
#[derive(Debug, Clone)]
pub struct Event {
    /// The watched directory, with trailing separators stripped.
    pub path: PathBuf,
    /// Name of the directory entry the event concerns.
    pub file: String,
    /// Raw event mask of the record.
    pub kind: EventKind,
}

impl Event {
    /// Full path of the affected entry, `<path>/<file>`.
    ///
    /// A watch on `/` has an empty `path`; the entry still renders as `/<file>`.
    pub fn full_path(&self) -> PathBuf {
        let mut full = OsString::from(self.path.as_os_str());
        full.push("/");
        full.push(&self.file);
        PathBuf::from(full)
    }
}

// `PathBuf` equality is component-wise (`"D///" == "D"`); events compare
// the reported path byte for byte.
impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.path.as_os_str() == other.path.as_os_str()
            && self.file == other.file
            && self.kind == other.kind
    }
}

impl Eq for Event {}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.kind, self.full_path().display())
    }
}
