// src/watch/mod.rs

//! Single-directory change notification on top of Linux inotify.
//!
//! This module is responsible for:
//! - Owning the inotify handle and its one watch (`channel.rs`).
//! - Decoding the raw record stream of a read (`decode.rs`).
//! - Turning records into [`Event`] values and handing them to a callback
//!   (`notifier.rs`).
//!
//! It does **not** watch recursively, manage several paths, or coalesce
//! events; one `listen` call is one read.

pub mod channel;
pub mod decode;
pub mod event;
pub mod notifier;
pub mod path_utils;

pub use channel::{InotifyChannel, ReadOutcome};
pub use decode::{records, RawRecord, EVENT_BUF_LEN, HEADER_LEN};
pub use event::{Event, EventKind};
pub use notifier::{Callback, ListenOutcome, Notifier, NotifierOptions};
pub use path_utils::clear_path;
