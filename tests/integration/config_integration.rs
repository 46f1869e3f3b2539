//! Integration tests for layered configuration loading

use super::test_utils::with_isolated_env;
use dirkeep::config::{global_config_path, workspace_config_path, ConfigLoader};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults_without_any_source() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    let config = with_isolated_env(&test_dir, &[], || {
        ConfigLoader::load(Some(workspace.path())).unwrap()
    });

    assert_eq!(config.marker.file_name, ".gitkeep");
    assert!(config.marker.ignore_patterns.is_empty());
}

#[test]
fn test_workspace_file_is_read() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    fs::write(
        workspace_config_path(workspace.path()),
        "[marker]\nfile_name = \".keep\"\nignore_patterns = [\"node_modules\"]\n",
    )
    .unwrap();

    let config = with_isolated_env(&test_dir, &[], || {
        ConfigLoader::load(Some(workspace.path())).unwrap()
    });

    assert_eq!(config.marker.file_name, ".keep");
    assert_eq!(config.marker.ignore_patterns, vec!["node_modules"]);
}

#[test]
fn test_workspace_file_overrides_global_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    fs::write(
        workspace_config_path(workspace.path()),
        "[marker]\nfile_name = \".workspace-keep\"\n",
    )
    .unwrap();

    let config = with_isolated_env(&test_dir, &[], || {
        let global = global_config_path().unwrap();
        fs::create_dir_all(global.parent().unwrap()).unwrap();
        fs::write(
            &global,
            "[marker]\nfile_name = \".global-keep\"\nignore_patterns = [\"target\"]\n",
        )
        .unwrap();
        ConfigLoader::load(Some(workspace.path())).unwrap()
    });

    assert_eq!(config.marker.file_name, ".workspace-keep");
    assert_eq!(config.marker.ignore_patterns, vec!["target"]);
}

#[test]
fn test_environment_overrides_files() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    fs::write(
        workspace_config_path(workspace.path()),
        "[marker]\nfile_name = \".keep\"\n",
    )
    .unwrap();

    let config = with_isolated_env(
        &test_dir,
        &[
            ("DIRKEEP_MARKER__FILE_NAME", ".env-keep"),
            ("DIRKEEP_MARKER__IGNORE_PATTERNS", "dist,build"),
        ],
        || ConfigLoader::load(Some(workspace.path())).unwrap(),
    );

    assert_eq!(config.marker.file_name, ".env-keep");
    assert_eq!(config.marker.ignore_patterns, vec!["dist", "build"]);
}

#[test]
fn test_explicit_file_skips_workspace_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    fs::write(
        workspace_config_path(workspace.path()),
        "[marker]\nfile_name = \".workspace-keep\"\n",
    )
    .unwrap();
    let explicit = test_dir.path().join("explicit.toml");
    fs::write(&explicit, "[marker]\nignore_patterns = [\"vendor\"]\n").unwrap();

    let config = with_isolated_env(&test_dir, &[], || {
        ConfigLoader::load_from_file(&explicit).unwrap()
    });

    assert_eq!(config.marker.file_name, ".gitkeep");
    assert_eq!(config.marker.ignore_patterns, vec!["vendor"]);
}

#[test]
fn test_malformed_workspace_file_is_error() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    fs::write(workspace_config_path(workspace.path()), "[marker\nbroken").unwrap();

    let result = with_isolated_env(&test_dir, &[], || ConfigLoader::load(Some(workspace.path())));
    assert!(result.is_err());
}
