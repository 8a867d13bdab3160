//! Graphwalk Core Library
//!
//! Graph store, traversal and shortest-path engine behind the graphwalk CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
