//! Integration tests for recursive emptiness classification

use super::test_utils::build_tree;
use dirkeep::ignore::IgnoreSet;
use dirkeep::tree::is_empty;
use std::fs;
use tempfile::TempDir;

const MARKER: &str = ".gitkeep";

/// A directory holding only ignored entries, files or folders, is empty
#[test]
fn test_only_ignored_entries_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    build_tree(root, &["lib/node_modules/pkg/index.js", "lib/.DS_Store"]);

    let ignore = IgnoreSet::new(["node_modules", ".DS_Store"]);
    assert!(is_empty(&root.join("lib"), &ignore, MARKER));
}

/// Ignored directories are never read: an unreadable one cannot spoil the verdict
#[cfg(unix)]
#[test]
fn test_ignored_directory_is_never_visited() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    build_tree(root, &["lib/secret/"]);
    let secret = root.join("lib/secret");
    fs::set_permissions(&secret, fs::Permissions::from_mode(0o000)).unwrap();

    let ignore = IgnoreSet::new(["secret"]);
    let verdict = is_empty(&root.join("lib"), &ignore, MARKER);
    fs::set_permissions(&secret, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(verdict);
}

/// Unreadable subdirectories make the ancestor conservatively non-empty
#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_is_not_empty() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    build_tree(root, &["lib/locked/"]);
    let locked = root.join("lib/locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users read through permissions; the directory is then truly empty
    let readable = fs::read_dir(&locked).is_ok();
    let verdict = is_empty(&root.join("lib"), &IgnoreSet::default(), MARKER);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(verdict, readable);
}

/// Markers scattered through an otherwise empty tree never count
#[test]
fn test_markers_at_every_level_stay_empty() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    build_tree(root, &["a/b/c/"]);
    for dir in ["a", "a/b", "a/b/c"] {
        fs::write(root.join(dir).join(MARKER), "").unwrap();
    }

    assert!(is_empty(&root.join("a"), &IgnoreSet::default(), MARKER));
}

/// One real file anywhere below flips the verdict for the whole chain
#[test]
fn test_single_deep_file_in_wide_tree() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    build_tree(
        root,
        &["t/a/", "t/b/", "t/c/d/", "t/c/e/f/", "t/c/e/g/notes.txt"],
    );
    let ignore = IgnoreSet::default();

    assert!(!is_empty(&root.join("t"), &ignore, MARKER));
    assert!(!is_empty(&root.join("t/c"), &ignore, MARKER));
    assert!(is_empty(&root.join("t/a"), &ignore, MARKER));
    assert!(is_empty(&root.join("t/c/d"), &ignore, MARKER));
    assert!(is_empty(&root.join("t/c/e/f"), &ignore, MARKER));
}

/// Classification never writes
#[test]
fn test_classification_has_no_side_effects() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    build_tree(root, &["a/b/", "c/file.txt"]);

    let ignore = IgnoreSet::default();
    let _ = is_empty(root, &ignore, MARKER);
    let _ = is_empty(&root.join("a"), &ignore, MARKER);

    assert!(!root.join("a").join(MARKER).exists());
    assert!(!root.join("a/b").join(MARKER).exists());
    assert_eq!(fs::read_dir(root.join("a/b")).unwrap().count(), 0);
}
