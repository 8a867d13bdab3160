use crate::error::Result;
use crate::graph::algos;
use crate::graph::bfs::bfs_shortest_path;
use crate::graph::store::Graph;
use crate::graph::traversal::Node;
use crate::graph::types::{ShortestPath, Weight};
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

/// Graph handle that can be shared across threads.
///
/// Queries hold the read lock for their whole run, so any number of them can
/// proceed together; `add_edge` takes the write lock and waits for them.
/// Clones share the same underlying store.
#[derive(Debug)]
pub struct SharedGraph<N> {
    inner: Arc<RwLock<Graph<N>>>,
}

impl<N> Clone for SharedGraph<N> {
    fn clone(&self) -> Self {
        SharedGraph {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<N: Node> Default for SharedGraph<N> {
    fn default() -> Self {
        Graph::default().into()
    }
}

impl<N: Node> From<Graph<N>> for SharedGraph<N> {
    fn from(graph: Graph<N>) -> Self {
        SharedGraph {
            inner: Arc::new(RwLock::new(graph)),
        }
    }
}

impl<N: Node> SharedGraph<N> {
    pub fn new(directed: bool) -> Self {
        Graph::new(directed).into()
    }

    pub fn add_edge(&self, u: N, v: N, weight: impl Into<Weight>) {
        self.inner.write().add_edge(u, v, weight);
    }

    /// Borrow the graph for several reads under one lock
    pub fn read(&self) -> RwLockReadGuard<'_, Graph<N>> {
        self.inner.read()
    }

    pub fn bfs(&self, start: &N) -> Result<Vec<N>> {
        algos::bfs(&*self.read(), start)
    }

    pub fn bfs_shortest_path(&self, start: &N, end: &N) -> Result<Option<Vec<N>>> {
        bfs_shortest_path(&*self.read(), start, end)
    }

    pub fn dfs_recursive(&self, start: &N) -> Result<Vec<N>> {
        algos::dfs_recursive(&*self.read(), start)
    }

    pub fn dfs_iterative(&self, start: &N) -> Result<Vec<N>> {
        algos::dfs_iterative(&*self.read(), start)
    }

    pub fn dijkstra(&self, start: &N, end: &N) -> Result<ShortestPath<N>> {
        algos::dijkstra(&*self.read(), start, end)
    }
}
