//! One-shot reconciliation: add a marker to every empty directory.
//!
//! Each directory found below a root is judged on its own subtree, so the
//! visiting order does not matter. Failures are contained per directory: a
//! marker that cannot be written is logged and counted, and the sweep moves on.

use crate::config::MarkerConfig;
use crate::marker::{self, CreateOutcome};
use crate::tree::{is_empty, Walker, WalkerConfig};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Sweep options
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepOptions {
    /// Decide without writing anything
    pub dry_run: bool,
}

/// Summary of one sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// Markers created (or, in dry-run, that would be created)
    pub added: usize,
    /// Empty directories that already held a marker
    pub already_marked: usize,
    /// Directories skipped because of a read or write failure
    pub failed: usize,
    /// Directories counted in `added`, sorted per root
    pub directories: Vec<PathBuf>,
    pub dry_run: bool,
}

impl SweepReport {
    fn merge(&mut self, other: SweepReport) {
        self.added += other.added;
        self.already_marked += other.already_marked;
        self.failed += other.failed;
        self.directories.extend(other.directories);
    }
}

/// Sweep every root and return how many markers were added.
pub fn sweep<P: AsRef<Path>>(
    roots: &[P],
    config: &MarkerConfig,
    options: SweepOptions,
) -> SweepReport {
    let mut report = SweepReport {
        dry_run: options.dry_run,
        ..Default::default()
    };

    for root in roots {
        report.merge(sweep_root(root.as_ref(), config, options));
    }

    info!(
        roots = roots.len(),
        added = report.added,
        already_marked = report.already_marked,
        failed = report.failed,
        dry_run = options.dry_run,
        "Sweep completed"
    );
    report
}

fn sweep_root(root: &Path, config: &MarkerConfig, options: SweepOptions) -> SweepReport {
    let ignore = config.ignore_set();
    let marker_name = config.file_name.as_str();
    let walker_config = WalkerConfig {
        ignore: ignore.clone(),
    };
    let walked = Walker::with_config(root.to_path_buf(), walker_config).walk();

    let mut report = SweepReport {
        failed: walked.errors,
        dry_run: options.dry_run,
        ..Default::default()
    };

    for dir in walked.directories {
        let empty = is_empty(&dir, &ignore, marker_name);
        debug!(path = %dir.display(), empty, "Classified directory");
        if !empty {
            continue;
        }

        if options.dry_run {
            if marker::marker_path(&dir, marker_name).exists() {
                report.already_marked += 1;
            } else {
                report.added += 1;
                report.directories.push(dir);
            }
            continue;
        }

        match marker::create_marker(&dir, marker_name) {
            Ok(CreateOutcome::Created) => {
                info!(path = %dir.display(), marker = marker_name, "Added marker");
                report.added += 1;
                report.directories.push(dir);
            }
            Ok(CreateOutcome::AlreadyExists) => report.already_marked += 1,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "Failed to add marker");
                report.failed += 1;
            }
        }
    }

    report
}
