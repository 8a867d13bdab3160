use crate::error::{GraphError, Result};
use crate::graph::traversal::{GraphProvider, Node};

/// Fail with `UnknownNode` unless `start` has been referenced by the graph
pub fn require_known_start<N: Node>(provider: &dyn GraphProvider<N>, start: &N) -> Result<()> {
    if provider.contains(start) {
        Ok(())
    } else {
        tracing::debug!(start = %start, "unknown start node");
        Err(GraphError::unknown_node(start))
    }
}

/// Check every edge weight is finite and non-negative.
///
/// Greedy shortest paths treat a popped distance as final; a negative edge
/// anywhere in the graph breaks that, so the whole graph is checked before
/// the search starts.
pub fn validate_weights<N: Node>(provider: &dyn GraphProvider<N>) -> Result<()> {
    for node in provider.nodes() {
        for (neighbor, weight) in provider.neighbors(&node) {
            if !weight.is_valid_cost() {
                tracing::debug!(from = %node, to = %neighbor, weight = %weight, "invalid edge weight");
                return Err(GraphError::invalid_weight(&node, &neighbor, weight.value()));
            }
        }
    }
    Ok(())
}
