//! Config loader facade: the only entry point the CLI uses.

use super::merge::merge_policy;
use super::sources::{env, global_file, workspace_file};
use super::DirkeepConfig;
use crate::error::ApiError;
use config::{File, FileFormat};
use std::path::Path;
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (highest last): defaults, global file, workspace file,
    /// environment. `workspace_root` is the first open root, if any.
    pub fn load(workspace_root: Option<&Path>) -> Result<DirkeepConfig, ApiError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        builder = global_file::add_to_builder(builder)?;
        if let Some(root) = workspace_root {
            builder = workspace_file::add_to_builder(builder, root)?;
        }
        builder = env::add_to_builder(builder);

        let config: DirkeepConfig = builder.build()?.try_deserialize()?;
        debug!(
            marker = %config.marker.file_name,
            ignore_patterns = config.marker.ignore_patterns.len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from an explicit file. Replaces the global and
    /// workspace files; defaults and environment still apply.
    pub fn load_from_file(path: &Path) -> Result<DirkeepConfig, ApiError> {
        if !path.is_file() {
            return Err(ApiError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let mut builder = merge_policy::builder_with_defaults()?;
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        builder = env::add_to_builder(builder);

        Ok(builder.build()?.try_deserialize()?)
    }
}
