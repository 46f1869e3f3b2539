//! Directory walker for the sweep.
//!
//! Enumerates every directory below a root. Directories with an ignored
//! basename are pruned together with their whole subtree. The root itself is
//! not yielded: a workspace root never receives a marker.

use crate::ignore::IgnoreSet;
use std::path::PathBuf;
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Directory walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Basenames whose directories are skipped and not descended into
    pub ignore: IgnoreSet,
}

/// Result of one walk: the directories found plus the number of entries that
/// could not be read. Unreadable entries are logged and skipped.
#[derive(Debug, Clone, Default)]
pub struct WalkOutcome {
    pub directories: Vec<PathBuf>,
    pub errors: usize,
}

/// Directory walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the tree and collect all directories below the root.
    ///
    /// Returns directories sorted by path for determinism.
    pub fn walk(&self) -> WalkOutcome {
        let mut outcome = WalkOutcome::default();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !self.should_ignore(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(
                        root = %self.root.display(),
                        path = ?e.path(),
                        error = %e,
                        "Failed to read directory entry"
                    );
                    outcome.errors += 1;
                    continue;
                }
            };

            if entry.depth() == 0 || !entry.file_type().is_dir() {
                continue;
            }
            outcome.directories.push(entry.into_path());
        }

        outcome.directories.sort();
        outcome
    }

    /// Only entries below the root are subject to ignore rules.
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0 && self.config.ignore.is_ignored(entry.file_name())
    }
}
