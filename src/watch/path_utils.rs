// src/watch/path_utils.rs

//! Utility functions for path handling in the notifier.

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// Strip every trailing `/` from `path`.
///
/// `"dir///"` becomes `"dir"`, and a path made only of separators (e.g. `"/"`)
/// collapses to the empty path. Applying it twice gives the same result as
/// applying it once.
pub fn clear_path(path: &Path) -> PathBuf {
    let mut bytes = path.as_os_str().as_bytes();
    while let Some((&b'/', rest)) = bytes.split_last() {
        bytes = rest;
    }
    PathBuf::from(OsStr::from_bytes(bytes))
}
