use crate::graph::traversal::Node;
use crate::graph::types::Weight;
use std::collections::HashMap;
use std::fmt;

/// Adjacency-list graph with weighted edges.
///
/// Nodes are interned into an arena in first-seen order; each arena slot owns
/// its outgoing neighbor list, also kept in first-insertion order. The
/// `directed` flag is fixed at construction.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    directed: bool,
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    adjacency: Vec<Vec<(usize, Weight)>>,
}

impl<N: Node> Default for Graph<N> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<N: Node> Graph<N> {
    pub fn new(directed: bool) -> Self {
        Graph {
            directed,
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Build a graph by inserting `(from, to, weight)` triples in order
    pub fn from_edges<W, I>(directed: bool, edges: I) -> Self
    where
        W: Into<Weight>,
        I: IntoIterator<Item = (N, N, W)>,
    {
        let mut graph = Self::new(directed);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Insert or overwrite the edge `u -> v` (and `v -> u` when undirected).
    ///
    /// Both endpoints are created if absent. Re-inserting an existing pair
    /// replaces its weight in place, keeping the neighbor's position.
    pub fn add_edge(&mut self, u: N, v: N, weight: impl Into<Weight>) {
        let weight = weight.into();
        let from = self.intern(u);
        let to = self.intern(v);

        self.link(from, to, weight);
        if !self.directed && from != to {
            self.link(to, from, weight);
        }

        tracing::trace!(
            from = %self.nodes[from],
            to = %self.nodes[to],
            weight = %weight,
            directed = self.directed,
            "add_edge"
        );
    }

    /// Insert an edge with [`Weight::UNIT`]
    pub fn add_unweighted_edge(&mut self, u: N, v: N) {
        self.add_edge(u, v, Weight::UNIT);
    }

    /// Outgoing `(neighbor, weight)` pairs in insertion order.
    ///
    /// A node that was never referenced has no neighbors.
    pub fn neighbors(&self, node: &N) -> Vec<(&N, Weight)> {
        match self.index.get(node) {
            Some(&slot) => self.adjacency[slot]
                .iter()
                .map(|&(to, weight)| (&self.nodes[to], weight))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Weight of the edge `u -> v`, if recorded
    pub fn weight(&self, u: &N, v: &N) -> Option<Weight> {
        let from = *self.index.get(u)?;
        let to = *self.index.get(v)?;
        self.adjacency[from]
            .iter()
            .find(|(target, _)| *target == to)
            .map(|&(_, weight)| weight)
    }

    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Nodes in first-seen order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of recorded arcs; an undirected edge counts in both directions
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn intern(&mut self, node: N) -> usize {
        if let Some(&slot) = self.index.get(&node) {
            return slot;
        }
        let slot = self.nodes.len();
        self.index.insert(node.clone(), slot);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        slot
    }

    fn link(&mut self, from: usize, to: usize, weight: Weight) {
        let edges = &mut self.adjacency[from];
        match edges.iter_mut().find(|(target, _)| *target == to) {
            Some(existing) => existing.1 = weight,
            None => edges.push((to, weight)),
        }
    }
}

impl<N: Node> fmt::Display for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (slot, node) in self.nodes.iter().enumerate() {
            write!(f, "{} connects to -> [", node)?;
            for (i, &(to, weight)) in self.adjacency[slot].iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "({}, {})", self.nodes[to], weight)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
