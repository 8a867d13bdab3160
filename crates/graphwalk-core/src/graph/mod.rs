//! Graph store, traversal and path-finding operations
//!
//! Provides:
//! - An adjacency-list store with directed or undirected edges
//! - BFS and DFS traversal, plus fewest-hops paths
//! - Dijkstra path-finding for weighted shortest paths
//! - Graph provider trait the algorithms query
//! - A read-shared, write-exclusive handle for multi-threaded use

pub mod algos;
pub mod bfs;
pub mod path;
pub mod shared;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::bfs::bfs;
pub use algos::{dfs_iterative, dfs_recursive, dijkstra, dijkstra_distances, dijkstra_with_stats};
pub use bfs::bfs_shortest_path;
pub use path::reconstruct_path;
pub use shared::SharedGraph;
pub use store::Graph;
pub use traversal::{GraphProvider, Node};
pub use types::{PathResult, SearchStats, ShortestPath, Strategy, TraversalResult, Weight};

use crate::error::Result;

/// Run the traversal named by `strategy` and package it for rendering
pub fn traverse<N: Node>(
    provider: &dyn GraphProvider<N>,
    start: &N,
    strategy: Strategy,
) -> Result<TraversalResult> {
    let order = match strategy {
        Strategy::Bfs => bfs(provider, start)?,
        Strategy::DfsRecursive => dfs_recursive(provider, start)?,
        Strategy::DfsIterative => dfs_iterative(provider, start)?,
    };

    Ok(TraversalResult {
        start: start.to_string(),
        strategy,
        order: order.iter().map(|n| n.to_string()).collect(),
    })
}

impl<N: Node> Graph<N> {
    pub fn bfs(&self, start: &N) -> Result<Vec<N>> {
        bfs(self, start)
    }

    pub fn bfs_shortest_path(&self, start: &N, end: &N) -> Result<Option<Vec<N>>> {
        bfs_shortest_path(self, start, end)
    }

    pub fn dfs_recursive(&self, start: &N) -> Result<Vec<N>> {
        dfs_recursive(self, start)
    }

    pub fn dfs_iterative(&self, start: &N) -> Result<Vec<N>> {
        dfs_iterative(self, start)
    }

    pub fn dijkstra(&self, start: &N, end: &N) -> Result<ShortestPath<N>> {
        dijkstra(self, start, end)
    }
}
