use crate::graph::store::Graph;
use crate::graph::types::Weight;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Identifier usable as a graph node (strings, integers, ...)
pub trait Node: Clone + Eq + Hash + Display + Debug {}

impl<T: Clone + Eq + Hash + Display + Debug> Node for T {}

/// Trait for providing graph adjacency to the algorithms
pub trait GraphProvider<N: Node> {
    /// Whether `node` has ever been referenced by an edge
    fn contains(&self, node: &N) -> bool;
    /// Outgoing `(neighbor, weight)` pairs in adjacency order
    fn neighbors(&self, node: &N) -> Vec<(N, Weight)>;
    /// Every known node
    fn nodes(&self) -> Vec<N>;
}

impl<N: Node> GraphProvider<N> for Graph<N> {
    fn contains(&self, node: &N) -> bool {
        Graph::contains(self, node)
    }

    fn neighbors(&self, node: &N) -> Vec<(N, Weight)> {
        Graph::neighbors(self, node)
            .into_iter()
            .map(|(n, w)| (n.clone(), w))
            .collect()
    }

    fn nodes(&self) -> Vec<N> {
        Graph::nodes(self).cloned().collect()
    }
}
