//! Path reconstruction from a predecessor table

use crate::graph::traversal::Node;
use crate::graph::types::{ShortestPath, Weight};
use std::collections::HashMap;

/// Rebuild the start→end path recorded in `predecessors`.
///
/// Walks back from `end` until a node without a predecessor (the search
/// start), then reverses. An infinite `cost` means `end` was never reached,
/// which yields an empty path instead of a walk.
pub fn reconstruct_path<N: Node>(
    predecessors: &HashMap<N, N>,
    end: &N,
    cost: Weight,
) -> ShortestPath<N> {
    if !cost.is_finite() {
        return ShortestPath::unreachable();
    }

    let mut path = vec![end.clone()];
    let mut current = end;

    // A well-formed table is a tree, so no walk is longer than the table
    while let Some(pred) = predecessors.get(current) {
        if path.len() > predecessors.len() {
            tracing::warn!(end = %end, "predecessor table contains a cycle");
            break;
        }
        path.push(pred.clone());
        current = pred;
    }

    path.reverse();
    ShortestPath { path, cost }
}
