//! Ignore rules for sweep and watch.
//!
//! Ignore patterns are plain basenames. An entry whose file name equals one of
//! them is invisible to every operation: it never counts as a real file, and a
//! directory with that name is never descended into. There is no glob or path
//! matching; `node_modules` hides every directory called `node_modules` at any
//! depth and nothing else.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Component, Path};

/// Immutable set of ignored basenames for the duration of one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    names: BTreeSet<String>,
}

impl IgnoreSet {
    /// Build from configured patterns. Surrounding whitespace and trailing
    /// slashes are dropped so `"node_modules/"` behaves like `"node_modules"`.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = patterns
            .into_iter()
            .map(|p| p.as_ref().trim().trim_end_matches(['/', '\\']).to_string())
            .filter(|p| !p.is_empty())
            .collect();
        Self { names }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the basename is ignored.
    pub fn is_ignored(&self, name: &OsStr) -> bool {
        match name.to_str() {
            Some(name) => self.names.contains(name),
            // Non UTF-8 names can never equal a configured pattern
            None => false,
        }
    }

    /// True when any normal component of `path` below `root` is ignored.
    ///
    /// Used by the watcher: anything living inside an ignored directory is
    /// outside the reconciled tree. Paths outside `root` are checked in full.
    pub fn covers(&self, root: &Path, path: &Path) -> bool {
        if self.names.is_empty() {
            return false;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        relative.components().any(|component| match component {
            Component::Normal(name) => self.is_ignored(name),
            _ => false,
        })
    }
}
