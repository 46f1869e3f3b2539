//! Environment source: `DIRKEEP_MARKER__FILE_NAME`, `DIRKEEP_MARKER__IGNORE_PATTERNS`.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "DIRKEEP";

/// Add environment overrides. Ignore patterns are a comma-separated list.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("marker.ignore_patterns")
            .try_parsing(true),
    )
}
