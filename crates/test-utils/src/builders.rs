#![allow(dead_code)]

/// Builder for raw inotify read buffers, as the kernel would lay them out.
///
/// Names are NUL-terminated and padded to a multiple of 16 bytes unless
/// [`RecordBuilder::record_exact`] is used.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    bytes: Vec<u8>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record for `name` (empty name means `len = 0`).
    pub fn record(self, wd: i32, mask: u32, name: &str) -> Self {
        let padded_len = if name.is_empty() {
            0
        } else {
            (name.len() + 1).div_ceil(16) * 16
        };
        let mut padded = name.as_bytes().to_vec();
        padded.resize(padded_len, 0);
        self.record_exact(wd, mask, 0, &padded)
    }

    /// Append a record with a cookie, as used for rename pairs.
    pub fn record_with_cookie(self, wd: i32, mask: u32, cookie: u32, name: &str) -> Self {
        let mut padded = name.as_bytes().to_vec();
        padded.push(0);
        self.record_exact(wd, mask, cookie, &padded)
    }

    /// Append a record whose name field is exactly `name_field`.
    pub fn record_exact(mut self, wd: i32, mask: u32, cookie: u32, name_field: &[u8]) -> Self {
        self.bytes.extend_from_slice(&wd.to_ne_bytes());
        self.bytes.extend_from_slice(&mask.to_ne_bytes());
        self.bytes.extend_from_slice(&cookie.to_ne_bytes());
        self.bytes
            .extend_from_slice(&(name_field.len() as u32).to_ne_bytes());
        self.bytes.extend_from_slice(name_field);
        self
    }

    /// Append arbitrary trailing bytes (e.g. a torn record).
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}
