//! Configuration sources, one module per layer.

pub(crate) mod env;
pub(crate) mod global_file;
pub(crate) mod workspace_file;
