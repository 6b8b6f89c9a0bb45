// src/watch/channel.rs

//! Owned inotify handle and the three syscalls the notifier needs.

use std::ffi::CString;
use std::io;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, FromRawFd, OwnedFd, RawFd};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::watch::event::EventKind;

/// Result of one `read(2)` on the channel.
#[derive(Debug)]
pub enum ReadOutcome {
    /// `n` bytes of raw records are in the buffer (may be 0).
    Count(usize),
    /// Non-blocking channel with nothing pending.
    WouldBlock,
    /// Any other failure, including `EINTR`.
    Error(io::Error),
}

/// An inotify instance. The descriptor is closed exactly once, on drop.
#[derive(Debug)]
pub struct InotifyChannel {
    fd: OwnedFd,
}

impl InotifyChannel {
    /// Open a new inotify instance, optionally in non-blocking mode.
    pub fn open(blocking: bool) -> io::Result<Self> {
        let mut flags = libc::IN_CLOEXEC;
        if !blocking {
            flags |= libc::IN_NONBLOCK;
        }
        let fd = unsafe { libc::inotify_init1(flags) };
        if fd < 0 {
            return Err(io::Error::last_os_error());
        }
        // SAFETY: `fd` was just returned by the kernel and nothing else owns it.
        let fd = unsafe { OwnedFd::from_raw_fd(fd) };
        Ok(Self { fd })
    }

    /// Register `path` with `mask` and return the kernel's watch descriptor.
    pub fn add_watch(&self, path: &Path, mask: EventKind) -> io::Result<i32> {
        let c_path = CString::new(path.as_os_str().as_bytes())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let wd = unsafe { libc::inotify_add_watch(self.fd.as_raw_fd(), c_path.as_ptr(), mask.bits()) };
        if wd < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(wd)
    }

    /// Perform a single read into `buffer`.
    pub fn read(&self, buffer: &mut [u8]) -> ReadOutcome {
        let res = unsafe {
            libc::read(
                self.fd.as_raw_fd(),
                buffer.as_mut_ptr() as *mut libc::c_void,
                buffer.len(),
            )
        };
        if res < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::WouldBlock {
                return ReadOutcome::WouldBlock;
            }
            return ReadOutcome::Error(err);
        }
        ReadOutcome::Count(res as usize)
    }
}

impl AsFd for InotifyChannel {
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.fd.as_fd()
    }
}

impl AsRawFd for InotifyChannel {
    fn as_raw_fd(&self) -> RawFd {
        self.fd.as_raw_fd()
    }
}
