use crate::error::Result;
use crate::graph::algos::shared::require_known_start;
use crate::graph::traversal::{GraphProvider, Node};
use std::collections::{HashSet, VecDeque};

/// State tracked during BFS traversal
struct BfsState<N> {
    visited: HashSet<N>,
    queue: VecDeque<N>,
    order: Vec<N>,
}

impl<N: Node> BfsState<N> {
    fn new(start: &N) -> Self {
        let mut state = Self {
            visited: HashSet::new(),
            queue: VecDeque::new(),
            order: Vec::new(),
        };
        state.discover(start.clone());
        state
    }

    /// Mark visited and enqueue in one step, so a node reached from two
    /// parents in the same layer is only queued once
    fn discover(&mut self, node: N) {
        if self.visited.insert(node.clone()) {
            self.queue.push_back(node);
        }
    }
}

/// Breadth-first traversal from `start`.
///
/// Returns nodes in discovery order: every node at hop distance `k` appears
/// before any node at hop distance `k + 1`.
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn bfs<N: Node>(provider: &dyn GraphProvider<N>, start: &N) -> Result<Vec<N>> {
    require_known_start(provider, start)?;

    let mut state = BfsState::new(start);

    while let Some(current) = state.queue.pop_front() {
        for (neighbor, _) in provider.neighbors(&current) {
            state.discover(neighbor);
        }
        state.order.push(current);
    }

    tracing::debug!(visited = state.order.len(), "bfs complete");
    Ok(state.order)
}
