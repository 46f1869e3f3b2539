//! Directory classification: does a subtree hold any real file?
//!
//! A directory is empty when none of its entries is a real file and every
//! subdirectory that is not ignored is itself empty. The marker file and
//! ignored basenames never count. Classification is read-only and total: a
//! directory that cannot be read is reported through `tracing` and judged not
//! empty, so a failure can only ever suppress a marker, never place one.

use crate::ignore::IgnoreSet;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Kind of a directory entry after following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Directory,
    /// Sockets, FIFOs, devices: neither content nor structure
    Other,
}

/// True when `path` contains no real files anywhere in its subtree.
///
/// Never mutates the filesystem and never fails; unreadable directories and
/// entries whose status cannot be read make the verdict `false`.
pub fn is_empty(path: &Path, ignore: &IgnoreSet, marker_name: &str) -> bool {
    let mut ancestors = HashSet::new();
    match classify(path, ignore, OsStr::new(marker_name), &mut ancestors) {
        Ok(empty) => empty,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to classify directory");
            false
        }
    }
}

fn classify(
    path: &Path,
    ignore: &IgnoreSet,
    marker_name: &OsStr,
    ancestors: &mut HashSet<PathBuf>,
) -> io::Result<bool> {
    // A symlink cycle back to a directory already on the stack adds nothing new
    let canonical = dunce::canonicalize(path)?;
    if !ancestors.insert(canonical.clone()) {
        return Ok(true);
    }

    let verdict = classify_entries(path, ignore, marker_name, ancestors);
    ancestors.remove(&canonical);
    verdict
}

fn classify_entries(
    path: &Path,
    ignore: &IgnoreSet,
    marker_name: &OsStr,
    ancestors: &mut HashSet<PathBuf>,
) -> io::Result<bool> {
    let mut subdirectories = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name();
        if ignore.is_ignored(&name) {
            continue;
        }
        match entry_kind(&entry.path())? {
            EntryKind::File if name.as_os_str() == marker_name => {}
            // Any real file settles the verdict without descending
            EntryKind::File => return Ok(false),
            EntryKind::Directory => subdirectories.push(entry.path()),
            EntryKind::Other => {}
        }
    }

    for subdirectory in subdirectories {
        if !classify(&subdirectory, ignore, marker_name, ancestors)? {
            return Ok(false);
        }
    }

    Ok(true)
}

fn entry_kind(path: &Path) -> io::Result<EntryKind> {
    let metadata = fs::metadata(path)?;
    Ok(if metadata.is_file() {
        EntryKind::File
    } else if metadata.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::Other
    })
}
