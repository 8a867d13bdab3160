//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first traversal
//! - `dfs`: Depth-first traversal, pre-order and stack-driven
//! - `dijkstra`: Weighted shortest path finding
//! - `shared`: Precondition checks used by multiple algorithms

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::bfs;
pub use dfs::{dfs_iterative, dfs_recursive};
pub use dijkstra::{dijkstra, dijkstra_distances, dijkstra_with_stats};
pub use shared::{require_known_start, validate_weights};
