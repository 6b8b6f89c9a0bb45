// src/watch/decode.rs

//! Decoding of the raw record stream returned by an inotify read.
//!
//! Each record is a fixed 16-byte header (`wd`, `mask`, `cookie`, `len`, all
//! native-endian 32-bit) followed by `len` bytes of NUL-padded name. Records
//! are packed back to back, so the next one starts at `header + len`.

use std::mem::size_of;

use tracing::warn;

/// Size of the fixed part of a record.
pub const HEADER_LEN: usize = size_of::<libc::inotify_event>();

/// Longest file name the kernel reports.
pub const NAME_MAX: usize = 255;

/// Read buffer size: room for 1024 records carrying a maximal name.
pub const EVENT_BUF_LEN: usize = 1024 * (HEADER_LEN + NAME_MAX + 1);

/// One record borrowed from a read buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub wd: i32,
    pub mask: u32,
    pub cookie: u32,
    /// The `len` field as sent by the kernel (includes NUL padding).
    pub name_len: u32,
    /// Name bytes up to the first NUL.
    pub name: &'a [u8],
}

impl RawRecord<'_> {
    /// Records without a name or with an empty mask are never dispatched.
    pub fn is_dispatchable(&self) -> bool {
        self.name_len != 0 && self.mask != 0
    }
}

/// Iterate over the records in `buf`, in order.
///
/// `buf` must already be cut to the byte count the read returned. A trailing
/// record whose header or name runs past the end stops the iteration.
pub fn records(buf: &[u8]) -> Records<'_> {
    Records { buf, offset: 0 }
}

#[derive(Debug, Clone)]
pub struct Records<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> Iterator for Records<'a> {
    type Item = RawRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.buf.get(self.offset..)?;
        if rest.is_empty() {
            return None;
        }
        if rest.len() < HEADER_LEN {
            warn!(
                offset = self.offset,
                remaining = rest.len(),
                "truncated inotify record header"
            );
            self.offset = self.buf.len();
            return None;
        }

        let wd = read_u32(rest, 0) as i32;
        let mask = read_u32(rest, 4);
        let cookie = read_u32(rest, 8);
        let name_len = read_u32(rest, 12);

        let end = HEADER_LEN + name_len as usize;
        if rest.len() < end {
            warn!(
                offset = self.offset,
                name_len,
                remaining = rest.len(),
                "truncated inotify record name"
            );
            self.offset = self.buf.len();
            return None;
        }

        let padded = &rest[HEADER_LEN..end];
        let name = match padded.iter().position(|&b| b == 0) {
            Some(nul) => &padded[..nul],
            None => padded,
        };

        self.offset += end;
        Some(RawRecord {
            wd,
            mask,
            cookie,
            name_len,
            name,
        })
    }
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_ne_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}
