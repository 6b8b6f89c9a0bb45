// src/watch/notifier.rs

use std::fmt;
use std::io;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, RawFd};
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace, warn};

use crate::watch::channel::{InotifyChannel, ReadOutcome};
use crate::watch::decode::{self, EVENT_BUF_LEN};
use crate::watch::event::{Event, EventKind};
use crate::watch::path_utils::clear_path;

/// Callback invoked once per dispatched event.
pub type Callback = Box<dyn FnMut(Event) + Send>;

/// Construction options for [`Notifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifierOptions {
    /// Kinds the kernel should report for the watched path.
    pub mask: EventKind,
    /// Whether `listen` blocks until something is pending.
    pub blocking: bool,
}

impl Default for NotifierOptions {
    fn default() -> Self {
        Self {
            mask: EventKind::DEFAULT_WATCH,
            blocking: true,
        }
    }
}

/// What a single [`Notifier::listen`] call observed.
#[derive(Debug)]
pub enum ListenOutcome {
    /// The read succeeded and this many events reached the callback.
    Dispatched(usize),
    /// Non-blocking mode and nothing was pending.
    WouldBlock,
    /// The read failed; nothing was dispatched.
    Failed(io::Error),
}

impl ListenOutcome {
    /// Number of callback invocations made by the call.
    pub fn dispatched(&self) -> usize {
        match self {
            ListenOutcome::Dispatched(n) => *n,
            _ => 0,
        }
    }
}

/// Watches one directory and feeds its events to a callback.
///
/// The inotify handle and the single watch are set up in the constructor and
/// stay fixed until the notifier is dropped, which closes the handle.
///
/// Failing to register the watch (missing directory, no permission) is not an
/// error: it is logged and the notifier simply never reports anything.
pub struct Notifier {
    channel: InotifyChannel,
    path: PathBuf,
    mask: EventKind,
    callback: Callback,
    buffer: Vec<u8>,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("channel", &self.channel)
            .field("path", &self.path)
            .field("mask", &self.mask)
            .finish_non_exhaustive()
    }
}

impl Notifier {
    /// Blocking notifier on `path` for `CREATE | DELETE | MODIFY`.
    pub fn new<F>(path: impl AsRef<Path>, callback: F) -> io::Result<Self>
    where
        F: FnMut(Event) + Send + 'static,
    {
        Self::with_options(path, callback, NotifierOptions::default())
    }

    /// Notifier with an explicit mask and blocking mode.
    ///
    /// Only a failure to open the inotify instance itself is returned.
    pub fn with_options<F>(
        path: impl AsRef<Path>,
        callback: F,
        options: NotifierOptions,
    ) -> io::Result<Self>
    where
        F: FnMut(Event) + Send + 'static,
    {
        let raw_path = path.as_ref();
        let channel = InotifyChannel::open(options.blocking)?;

        // The kernel gets the path exactly as given; only reported events use
        // the cleared form.
        match channel.add_watch(raw_path, options.mask) {
            Ok(wd) => info!(
                path = ?raw_path,
                wd,
                mask = %options.mask,
                blocking = options.blocking,
                "watch registered"
            ),
            Err(err) => warn!(
                path = ?raw_path,
                mask = %options.mask,
                %err,
                "failed to register watch; no events will be reported"
            ),
        }

        Ok(Self {
            channel,
            path: clear_path(raw_path),
            mask: options.mask,
            callback: Box::new(callback),
            buffer: vec![0; EVENT_BUF_LEN],
        })
    }

    /// The watched path with trailing separators stripped.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The mask the watch was registered with.
    pub fn mask(&self) -> EventKind {
        self.mask
    }

    /// Read once and dispatch every decoded event, in kernel order.
    ///
    /// Blocks in blocking mode until at least one record is available. Does
    /// not loop: call again to observe further changes. A panic in the
    /// callback propagates out of this call.
    pub fn listen(&mut self) -> ListenOutcome {
        let len = match self.channel.read(&mut self.buffer) {
            ReadOutcome::Count(len) => len,
            ReadOutcome::WouldBlock => {
                trace!(path = ?self.path, "no pending events");
                return ListenOutcome::WouldBlock;
            }
            ReadOutcome::Error(err) => {
                warn!(path = ?self.path, %err, "inotify read failed");
                return ListenOutcome::Failed(err);
            }
        };
        debug!(path = ?self.path, bytes = len, "read inotify records");

        let mut dispatched = 0;
        for record in decode::records(&self.buffer[..len]) {
            if !record.is_dispatchable() {
                trace!(?record, "skipping record without name or mask");
                continue;
            }
            let event = Event {
                path: self.path.clone(),
                file: String::from_utf8_lossy(record.name).into_owned(),
                kind: EventKind::from_raw(record.mask),
            };
            debug!(kind = %event.kind, file = %event.file, "dispatching event");
            (self.callback)(event);
            dispatched += 1;
        }

        ListenOutcome::Dispatched(dispatched)
    }
}

impl AsFd for Notifier {
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.channel.as_fd()
    }
}

impl AsRawFd for Notifier {
    fn as_raw_fd(&self) -> RawFd {
        self.channel.as_raw_fd()
    }
}
