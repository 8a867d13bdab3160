use crate::error::Result;
use crate::graph::algos::shared::require_known_start;
use crate::graph::traversal::{GraphProvider, Node};
use std::collections::{HashSet, VecDeque};

/// Fewest-hops path from `start` to `end`, ignoring edge weights.
///
/// The frontier holds whole paths rather than single nodes. Paths leave the
/// queue in non-decreasing length, so the first one ending at `end` has the
/// minimum edge count. Returns `None` when `end` is unreachable, including
/// when the graph has never seen it.
#[tracing::instrument(skip(provider), fields(start = %start, end = %end))]
pub fn bfs_shortest_path<N: Node>(
    provider: &dyn GraphProvider<N>,
    start: &N,
    end: &N,
) -> Result<Option<Vec<N>>> {
    require_known_start(provider, start)?;

    let mut visited: HashSet<N> = HashSet::new();
    let mut queue: VecDeque<Vec<N>> = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back(vec![start.clone()]);

    while let Some(path) = queue.pop_front() {
        let Some(current) = path.last() else {
            continue;
        };

        if current == end {
            tracing::debug!(hops = path.len() - 1, expanded = visited.len(), "path found");
            return Ok(Some(path));
        }

        for (neighbor, _) in provider.neighbors(current) {
            if visited.insert(neighbor.clone()) {
                let mut extended = Vec::with_capacity(path.len() + 1);
                extended.extend_from_slice(&path);
                extended.push(neighbor);
                queue.push_back(extended);
            }
        }
    }

    tracing::debug!(expanded = visited.len(), "no path");
    Ok(None)
}
