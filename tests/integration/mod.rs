//! Integration tests for the dirkeep marker maintenance system

mod classifier;
mod config_integration;
mod test_utils;
