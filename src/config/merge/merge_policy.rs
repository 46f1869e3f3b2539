//! Merge rules: defaults, override order, conflict handling.

use crate::config::DEFAULT_MARKER_FILE_NAME;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("marker.file_name", DEFAULT_MARKER_FILE_NAME)?
        .set_default("marker.ignore_patterns", Vec::<String>::new())
}
