//! CLI presentation: user-facing text and JSON for command results.

use crate::error::ApiError;
use crate::sweep::SweepReport;
use crate::watch::WatchStats;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;

fn to_json(value: serde_json::Value) -> Result<String, ApiError> {
    serde_json::to_string_pretty(&value)
        .map_err(|e| ApiError::ConfigError(format!("Failed to serialize output: {}", e)))
}

/// Warning shown when an operation has no workspace root to act on.
pub fn format_no_workspace(color: bool) -> String {
    let text = "No workspace folder open.";
    if color {
        format!("{} {}", "warning:".yellow().bold(), text)
    } else {
        format!("warning: {}", text)
    }
}

pub fn format_sweep_report(
    report: &SweepReport,
    marker_name: &str,
    format: &str,
    color: bool,
) -> Result<String, ApiError> {
    if format == "json" {
        return to_json(json!({
            "marker": marker_name,
            "added": report.added,
            "already_marked": report.already_marked,
            "failed": report.failed,
            "dry_run": report.dry_run,
            "directories": report.directories,
        }));
    }

    let count = if color {
        report.added.green().bold().to_string()
    } else {
        report.added.to_string()
    };
    let verb = if report.dry_run { "Would add" } else { "Added" };
    let mut s = format!("{} {} to {} empty folders", verb, marker_name, count);

    if report.dry_run {
        for dir in &report.directories {
            s.push_str(&format!("\n  - {}", dir.display()));
        }
    }
    if report.failed > 0 {
        let line = format!(
            "{} folders could not be processed (see log)",
            report.failed
        );
        if color {
            s.push_str(&format!("\n{}", line.red()));
        } else {
            s.push_str(&format!("\n{}", line));
        }
    }
    Ok(s)
}

pub fn format_check_result(path: &Path, empty: bool, format: &str) -> Result<String, ApiError> {
    if format == "json" {
        return to_json(json!({
            "path": path,
            "empty": empty,
        }));
    }
    let verdict = if empty { "empty" } else { "not empty" };
    Ok(format!("{}: {}", path.display(), verdict))
}

pub fn format_watch_stats(stats: &WatchStats) -> String {
    format!(
        "Watch stopped: {} events, {} markers removed, {} failures",
        stats.events, stats.removed, stats.failed
    )
}
