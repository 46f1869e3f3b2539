//! Workspace roots: the set of open project directories an operation covers.
//!
//! A root that does not exist or is not a directory is dropped with a warning.
//! When nothing survives, callers treat the operation as "no workspace open"
//! and leave the filesystem untouched.

use std::path::{Path, PathBuf};
use tracing::warn;

/// Resolved, de-duplicated set of workspace roots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workspace {
    roots: Vec<PathBuf>,
}

impl Workspace {
    /// Resolve candidate roots. Order is preserved and duplicates (after
    /// canonicalization) are dropped.
    pub fn resolve<I, P>(candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut roots: Vec<PathBuf> = Vec::new();
        for candidate in candidates {
            let candidate = candidate.as_ref();
            let canonical = match dunce::canonicalize(candidate) {
                Ok(path) => path,
                Err(e) => {
                    warn!(root = %candidate.display(), error = %e, "Skipping workspace root");
                    continue;
                }
            };
            if !canonical.is_dir() {
                warn!(root = %canonical.display(), "Skipping workspace root: not a directory");
                continue;
            }
            if !roots.contains(&canonical) {
                roots.push(canonical);
            }
        }
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// First root; workspace-level configuration is read from here.
    pub fn primary(&self) -> Option<&Path> {
        self.roots.first().map(PathBuf::as_path)
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// The root containing `path`, if any. Longest match wins for nested roots.
    pub fn root_for(&self, path: &Path) -> Option<&Path> {
        self.roots
            .iter()
            .filter(|root| path.starts_with(root))
            .max_by_key(|root| root.components().count())
            .map(PathBuf::as_path)
    }
}
