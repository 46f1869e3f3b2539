//! Directory Tree
//!
//! Read-only views of the workspace tree: enumeration of directories for the
//! sweep and the recursive emptiness verdict both reconcilers rely on.

pub mod classify;
pub mod walker;

pub use classify::is_empty;
pub use walker::{WalkOutcome, Walker, WalkerConfig};
