//! Shared test utilities for integration tests
//!
//! Provides tree fixtures and serialized access to the process environment so
//! configuration tests do not race each other.

use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const MANAGED_VARS: &[&str] = &[
    "HOME",
    "XDG_CONFIG_HOME",
    "DIRKEEP_MARKER__FILE_NAME",
    "DIRKEEP_MARKER__IGNORE_PATTERNS",
];

/// Environment variable state to restore after test
struct EnvState {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            saved: MANAGED_VARS
                .iter()
                .map(|name| (*name, std::env::var(name).ok()))
                .collect(),
        }
    }

    fn restore(self) {
        for (name, value) in self.saved {
            match value {
                Some(orig) => std::env::set_var(name, orig),
                None => std::env::remove_var(name),
            }
        }
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointed into `test_dir`, all
/// `DIRKEEP_MARKER__*` variables cleared, then `vars` applied. The original
/// environment is restored afterwards.
pub fn with_isolated_env<F, R>(test_dir: &TempDir, vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_home = test_dir.path().join("home");
    let test_config_home = test_dir.path().join("xdg-config");
    fs::create_dir_all(&test_home).unwrap();
    fs::create_dir_all(&test_config_home).unwrap();

    std::env::set_var("HOME", &test_home);
    std::env::set_var("XDG_CONFIG_HOME", &test_config_home);
    std::env::remove_var("DIRKEEP_MARKER__FILE_NAME");
    std::env::remove_var("DIRKEEP_MARKER__IGNORE_PATTERNS");
    for (name, value) in vars {
        std::env::set_var(name, value);
    }

    let result = f();

    env_state.restore();

    result
}

/// Create a tree below `root`. Entries ending in `/` are directories, every
/// other entry is a file with a short body. Parents are created as needed.
pub fn build_tree(root: &Path, entries: &[&str]) {
    for entry in entries {
        if let Some(dir) = entry.strip_suffix('/') {
            fs::create_dir_all(root.join(dir)).unwrap();
        } else {
            let path = root.join(entry);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, "content").unwrap();
        }
    }
}

/// Canonical path of a temp dir, matching what `Workspace::resolve` yields.
pub fn canonical_root(temp_dir: &TempDir) -> std::path::PathBuf {
    dunce::canonicalize(temp_dir.path()).unwrap()
}
