//! Marker file primitives.
//!
//! A marker is a zero-byte file with the configured basename placed directly
//! inside the directory it keeps alive. Creation uses `create_new` so a marker
//! that appears between the emptiness check and the write is left untouched,
//! and removal treats an already-missing marker as done.

use crate::error::StorageError;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of a create attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    AlreadyExists,
}

/// Outcome of a remove attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    AlreadyGone,
}

/// Path of the marker inside `dir`.
pub fn marker_path(dir: &Path, marker_name: &str) -> PathBuf {
    dir.join(marker_name)
}

/// True when a marker file is present in `dir`.
///
/// A directory carrying the marker's name is not a marker.
pub fn has_marker(dir: &Path, marker_name: &str) -> bool {
    fs::symlink_metadata(marker_path(dir, marker_name))
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}

/// Create an empty marker in `dir` unless any entry with that name exists.
pub fn create_marker(dir: &Path, marker_name: &str) -> Result<CreateOutcome, StorageError> {
    let path = marker_path(dir, marker_name);
    match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(_) => Ok(CreateOutcome::Created),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(CreateOutcome::AlreadyExists),
        Err(e) => Err(StorageError::IoError(io::Error::new(
            e.kind(),
            format!("Failed to create {}: {}", path.display(), e),
        ))),
    }
}

/// Remove the marker from `dir`.
pub fn remove_marker(dir: &Path, marker_name: &str) -> Result<RemoveOutcome, StorageError> {
    let path = marker_path(dir, marker_name);
    match fs::remove_file(&path) {
        Ok(()) => Ok(RemoveOutcome::Removed),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(RemoveOutcome::AlreadyGone),
        Err(e) => Err(StorageError::IoError(io::Error::new(
            e.kind(),
            format!("Failed to remove {}: {}", path.display(), e),
        ))),
    }
}
