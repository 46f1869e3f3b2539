//! Configuration System
//!
//! Layered configuration for marker maintenance. Sources are merged with the
//! `config` crate in increasing precedence: built-in defaults, the global user
//! file, the workspace file, then `DIRKEEP_*` environment variables. The result
//! is loaded once per command and handed to the core as a plain value; nothing
//! below the CLI reads configuration on its own.

use crate::error::ApiError;
use crate::ignore::IgnoreSet;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::{workspace_config_path, WORKSPACE_CONFIG_FILE};

/// Default marker basename.
pub const DEFAULT_MARKER_FILE_NAME: &str = ".gitkeep";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirkeepConfig {
    /// Marker placement settings
    #[serde(default)]
    pub marker: MarkerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Marker placement settings, passed explicitly into sweep and watch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Marker basename (default: `.gitkeep`)
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Basenames excluded from scanning and from the real-file test
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

fn default_file_name() -> String {
    DEFAULT_MARKER_FILE_NAME.to_string()
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            ignore_patterns: Vec::new(),
        }
    }
}

impl MarkerConfig {
    pub fn new(file_name: impl Into<String>, ignore_patterns: Vec<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ignore_patterns,
        }
    }

    /// Ignore set derived from `ignore_patterns`.
    pub fn ignore_set(&self) -> IgnoreSet {
        IgnoreSet::new(&self.ignore_patterns)
    }

    /// The marker must be a single plain basename so it always lands directly
    /// inside the directory it marks.
    pub fn validate(&self) -> Result<(), String> {
        let name = self.file_name.as_str();
        if name.trim().is_empty() {
            return Err("Marker file name cannot be empty".to_string());
        }
        let mut components = Path::new(name).components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_normal || name.contains('/') || name.contains('\\') {
            return Err(format!(
                "Marker file name '{}' must be a plain file name without path separators",
                name
            ));
        }
        if let Some(pattern) = self.ignore_patterns.iter().find(|p| p.trim().is_empty()) {
            return Err(format!("Ignore pattern cannot be empty: {:?}", pattern));
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Marker(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Marker(msg) => write!(f, "Marker: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl DirkeepConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.marker.validate() {
            errors.push(ValidationError::Marker(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold all problems into one `ApiError`.
    pub fn ensure_valid(&self) -> Result<(), ApiError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }
}
