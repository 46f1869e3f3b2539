//! Watch Mode
//!
//! Long-lived subscription to filesystem creation events under every workspace
//! root. Each new entry triggers one check of its immediate parent: when that
//! directory holds a marker but is no longer empty, the marker is deleted.
//! Ancestors are never revisited. Events are handled one at a time to
//! completion, and a failing event is logged without ending the watch.

use crate::config::MarkerConfig;
use crate::error::ApiError;
use crate::ignore::IgnoreSet;
use crate::marker::{self, RemoveOutcome};
use crate::tree::is_empty;
use crate::workspace::Workspace;
use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use parking_lot::RwLock;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Watch mode configuration
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Marker settings, fixed for the lifetime of the watch
    pub marker: MarkerConfig,
    /// How often the event loop checks for a stop request, in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            marker: MarkerConfig::default(),
            poll_interval_ms: 200,
        }
    }
}

/// What a single creation event led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatedOutcome {
    /// The marker in this directory was deleted
    MarkerRemoved(PathBuf),
    /// The parent directory holds no marker
    NoMarker,
    /// The parent still classifies as empty; marker kept
    StillEmpty,
    /// The path lies inside an ignored directory or has no parent
    Skipped,
    /// The marker went away before we could delete it
    AlreadyGone,
    /// Deleting the marker failed; logged and dropped
    Failed,
}

/// Reconcile one created path against its parent directory's marker.
///
/// `root` is the watched root containing `path`; ignore rules are applied to
/// the components below it.
pub fn reconcile_created(
    path: &Path,
    root: Option<&Path>,
    config: &MarkerConfig,
) -> CreatedOutcome {
    let ignore = config.ignore_set();
    reconcile_with(path, root, &ignore, &config.file_name)
}

fn reconcile_with(
    path: &Path,
    root: Option<&Path>,
    ignore: &IgnoreSet,
    marker_name: &str,
) -> CreatedOutcome {
    let Some(parent) = path.parent() else {
        return CreatedOutcome::Skipped;
    };
    if let Some(root) = root {
        if ignore.covers(root, parent) {
            debug!(path = %path.display(), "Ignoring event inside ignored directory");
            return CreatedOutcome::Skipped;
        }
    }

    if !marker::has_marker(parent, marker_name) {
        return CreatedOutcome::NoMarker;
    }
    if is_empty(parent, ignore, marker_name) {
        return CreatedOutcome::StillEmpty;
    }

    match marker::remove_marker(parent, marker_name) {
        Ok(RemoveOutcome::Removed) => {
            info!(path = %parent.display(), marker = marker_name, "Removed marker");
            CreatedOutcome::MarkerRemoved(parent.to_path_buf())
        }
        Ok(RemoveOutcome::AlreadyGone) => {
            debug!(path = %parent.display(), "Marker already gone");
            CreatedOutcome::AlreadyGone
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Error handling new file");
            CreatedOutcome::Failed
        }
    }
}

/// Paths a notify event introduces into a directory.
///
/// A rename target counts as a creation: the directory it lands in gains an
/// entry just the same. inotify reports each target twice, as `To` and again
/// inside `Both`, so only `To` is taken. Backends that cannot tell the two
/// sides apart (FSEvents) report `Any`; of those, the paths that still exist
/// are the targets.
pub fn created_paths(event: &Event) -> Vec<PathBuf> {
    match event.kind {
        EventKind::Create(_) => event.paths.clone(),
        EventKind::Modify(ModifyKind::Name(RenameMode::To)) => event.paths.clone(),
        EventKind::Modify(ModifyKind::Name(RenameMode::Any)) => event
            .paths
            .iter()
            .filter(|path| fs::symlink_metadata(path).is_ok())
            .cloned()
            .collect(),
        _ => Vec::new(),
    }
}

/// Counters for one watch session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WatchStats {
    pub events: usize,
    pub removed: usize,
    pub failed: usize,
}

/// Cancellation handle for a running watch.
#[derive(Debug, Clone)]
pub struct WatchHandle {
    running: Arc<RwLock<bool>>,
}

impl WatchHandle {
    /// Request the event loop to stop. No event is handled after the loop
    /// observes the request.
    pub fn stop(&self) {
        *self.running.write() = false;
    }

    pub fn is_running(&self) -> bool {
        *self.running.read()
    }
}

/// Route Ctrl-C to `handle` so the watch ends through its normal shutdown path.
pub fn stop_on_interrupt(handle: WatchHandle) -> Result<(), ApiError> {
    ctrlc::set_handler(move || {
        info!("Interrupt received, stopping watch");
        handle.stop();
    })
    .map_err(|e| ApiError::WatchError(format!("Failed to install interrupt handler: {}", e)))
}

/// Active OS subscription. Dropping it releases every root's watch.
pub struct Subscription {
    _watcher: RecommendedWatcher,
    events: mpsc::Receiver<notify::Result<Event>>,
}

/// Marker watcher over all workspace roots.
pub struct MarkerWatcher {
    workspace: Workspace,
    config: WatchConfig,
    ignore: IgnoreSet,
    running: Arc<RwLock<bool>>,
}

impl MarkerWatcher {
    /// Create a watcher. Fails with `NoWorkspace` when there is nothing to watch.
    pub fn new(workspace: Workspace, config: WatchConfig) -> Result<Self, ApiError> {
        if workspace.is_empty() {
            return Err(ApiError::NoWorkspace);
        }
        let ignore = config.marker.ignore_set();
        Ok(Self {
            workspace,
            config,
            ignore,
            running: Arc::new(RwLock::new(true)),
        })
    }

    pub fn handle(&self) -> WatchHandle {
        WatchHandle {
            running: Arc::clone(&self.running),
        }
    }

    /// Subscribe to every root recursively.
    pub fn subscribe(&self) -> Result<Subscription, ApiError> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            if let Err(e) = tx.send(res) {
                error!("Error sending watch event: {}", e);
            }
        })
        .map_err(|e| ApiError::WatchError(format!("Failed to create watcher: {}", e)))?;

        for root in self.workspace.roots() {
            watcher.watch(root, RecursiveMode::Recursive).map_err(|e| {
                ApiError::WatchError(format!("Failed to watch {}: {}", root.display(), e))
            })?;
            info!(root = %root.display(), "Watching workspace root");
        }

        Ok(Subscription {
            _watcher: watcher,
            events: rx,
        })
    }

    /// Subscribe and process events until stopped.
    pub fn run(&self) -> Result<WatchStats, ApiError> {
        let subscription = self.subscribe()?;
        Ok(self.process(subscription))
    }

    /// Process events from an existing subscription until the handle is
    /// stopped or the channel disconnects. The subscription is released on return.
    pub fn process(&self, subscription: Subscription) -> WatchStats {
        let mut stats = WatchStats::default();
        let poll = Duration::from_millis(self.config.poll_interval_ms.max(1));

        while *self.running.read() {
            match subscription.events.recv_timeout(poll) {
                Ok(Ok(event)) => {
                    if !*self.running.read() {
                        break;
                    }
                    for outcome in self.handle_event(&event) {
                        stats.events += 1;
                        match outcome {
                            CreatedOutcome::MarkerRemoved(_) => stats.removed += 1,
                            CreatedOutcome::Failed => stats.failed += 1,
                            _ => {}
                        }
                    }
                }
                Ok(Err(e)) => {
                    warn!("Watch error: {}", e);
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {}
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    error!("Watcher channel disconnected");
                    break;
                }
            }
        }

        info!(
            events = stats.events,
            removed = stats.removed,
            failed = stats.failed,
            "Watch stopped"
        );
        stats
    }

    /// Handle one notify event synchronously.
    pub fn handle_event(&self, event: &Event) -> Vec<CreatedOutcome> {
        created_paths(event)
            .iter()
            .map(|path| {
                let root = self.workspace.root_for(path);
                reconcile_with(path, root, &self.ignore, &self.config.marker.file_name)
            })
            .collect()
    }
}
