//! CLI parse: clap types for dirkeep. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dirkeep CLI - keep empty directories under version control
#[derive(Parser)]
#[command(name = "dirkeep")]
#[command(about = "Keep empty directories under version control with placeholder marker files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (repeat for a multi-root workspace)
    #[arg(long, default_value = ".")]
    pub workspace: Vec<PathBuf>,

    /// Configuration file path (overrides global and workspace config files)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable logging entirely
    #[arg(long)]
    pub quiet: bool,

    /// Enable verbose logging (debug level)
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable colored command output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a marker file to every empty folder in the workspace
    Add {
        /// Report what would be added without writing
        #[arg(long)]
        dry_run: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Watch the workspace and remove markers from folders that gain files
    Watch {
        /// How often to check for shutdown, in milliseconds
        #[arg(long, default_value = "200")]
        poll_interval_ms: u64,
    },
    /// Report whether a folder counts as empty
    Check {
        /// Folder to classify
        path: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

impl Commands {
    /// Stable command name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Add { .. } => "add",
            Commands::Watch { .. } => "watch",
            Commands::Check { .. } => "check",
        }
    }
}
