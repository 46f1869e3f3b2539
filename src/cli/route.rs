//! CLI route: single route table and run context.

use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_check_result, format_no_workspace, format_sweep_report, format_watch_stats,
};
use crate::config::{ConfigLoader, DirkeepConfig};
use crate::error::ApiError;
use crate::sweep::{sweep, SweepOptions};
use crate::tree::is_empty;
use crate::watch::{stop_on_interrupt, MarkerWatcher, WatchConfig};
use crate::workspace::Workspace;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

/// Runtime context for CLI execution: resolved workspace roots and the
/// configuration loaded for this invocation.
pub struct RunContext {
    workspace: Workspace,
    config: DirkeepConfig,
    color: bool,
}

impl RunContext {
    /// Resolve roots and load configuration. An explicit config file replaces
    /// the global and workspace files.
    pub fn new(roots: Vec<PathBuf>, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let workspace = Workspace::resolve(&roots);
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(workspace.primary())?,
        };
        Ok(Self::with_config(workspace, config))
    }

    pub fn with_config(workspace: Workspace, config: DirkeepConfig) -> Self {
        Self {
            workspace,
            config,
            color: false,
        }
    }

    /// Enable colored output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        self.config.ensure_valid()?;
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command.name(),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Add { dry_run, format } => {
                if self.workspace.is_empty() {
                    warn!("No workspace root available; nothing to sweep");
                    return Ok(format_no_workspace(self.color));
                }
                let report = sweep(
                    self.workspace.roots(),
                    &self.config.marker,
                    SweepOptions { dry_run: *dry_run },
                );
                format_sweep_report(&report, &self.config.marker.file_name, format, self.color)
            }
            Commands::Watch { poll_interval_ms } => {
                if self.workspace.is_empty() {
                    warn!("No workspace root available; nothing to watch");
                    return Ok(format_no_workspace(self.color));
                }
                let watch_config = WatchConfig {
                    marker: self.config.marker.clone(),
                    poll_interval_ms: *poll_interval_ms,
                };
                let watcher = MarkerWatcher::new(self.workspace.clone(), watch_config)?;
                stop_on_interrupt(watcher.handle())?;
                let stats = watcher.run()?;
                Ok(format_watch_stats(&stats))
            }
            Commands::Check { path, format } => {
                let ignore = self.config.marker.ignore_set();
                let empty = is_empty(path, &ignore, &self.config.marker.file_name);
                format_check_result(path, empty, format)
            }
        }
    }
}
