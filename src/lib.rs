//! Dirkeep: Placeholder Markers for Empty Directories
//!
//! Keeps version control aware of empty directories. A sweep places a marker
//! file in every directory whose subtree holds no real files, and a watcher
//! deletes a directory's marker as soon as real content appears in it.

pub mod cli;
pub mod config;
pub mod error;
pub mod ignore;
pub mod logging;
pub mod marker;
pub mod sweep;
pub mod tree;
pub mod watch;
pub mod workspace;
