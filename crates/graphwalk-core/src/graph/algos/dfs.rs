use crate::error::Result;
use crate::graph::algos::shared::require_known_start;
use crate::graph::traversal::{GraphProvider, Node};
use std::collections::HashSet;

/// One suspended call of the pre-order walk: the node being expanded and the
/// position of the next neighbor to try
struct Frame<N> {
    neighbors: Vec<N>,
    next: usize,
}

/// Visit `node` and suspend a frame over its neighbors
fn enter<N: Node>(
    provider: &dyn GraphProvider<N>,
    node: N,
    visited: &mut HashSet<N>,
    order: &mut Vec<N>,
    frames: &mut Vec<Frame<N>>,
) {
    visited.insert(node.clone());
    let neighbors = provider
        .neighbors(&node)
        .into_iter()
        .map(|(n, _)| n)
        .collect();
    order.push(node);
    frames.push(Frame { neighbors, next: 0 });
}

/// Depth-first pre-order traversal from `start`.
///
/// Visits `start`, then each unvisited neighbor in adjacency order before
/// backtracking, exactly as the recursive formulation would. Call frames
/// live on an explicit stack so deep graphs cannot exhaust the thread stack.
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn dfs_recursive<N: Node>(provider: &dyn GraphProvider<N>, start: &N) -> Result<Vec<N>> {
    require_known_start(provider, start)?;

    let mut visited: HashSet<N> = HashSet::new();
    let mut order: Vec<N> = Vec::new();
    let mut frames: Vec<Frame<N>> = Vec::new();

    enter(provider, start.clone(), &mut visited, &mut order, &mut frames);

    while let Some(frame) = frames.last_mut() {
        let Some(neighbor) = frame.neighbors.get(frame.next).cloned() else {
            frames.pop();
            continue;
        };
        frame.next += 1;

        if !visited.contains(&neighbor) {
            enter(provider, neighbor, &mut visited, &mut order, &mut frames);
        }
    }

    tracing::debug!(visited = order.len(), "dfs_recursive complete");
    Ok(order)
}

/// Depth-first traversal driven by an explicit LIFO stack.
///
/// Nodes are marked visited when popped, not when pushed, so a node may sit
/// on the stack more than once; later pops are no-ops. Neighbors are pushed
/// in reverse so the first neighbor is expanded first. The visited set
/// always equals that of [`dfs_recursive`]; the sequence is not guaranteed
/// to match when a node is reachable from several not-yet-expanded
/// predecessors.
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn dfs_iterative<N: Node>(provider: &dyn GraphProvider<N>, start: &N) -> Result<Vec<N>> {
    require_known_start(provider, start)?;

    let mut visited: HashSet<N> = HashSet::new();
    let mut order: Vec<N> = Vec::new();
    let mut stack: Vec<N> = vec![start.clone()];

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }

        for (neighbor, _) in provider.neighbors(&current).into_iter().rev() {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
        order.push(current);
    }

    tracing::debug!(visited = order.len(), "dfs_iterative complete");
    Ok(order)
}
