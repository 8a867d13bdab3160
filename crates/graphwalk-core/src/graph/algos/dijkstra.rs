use crate::error::{GraphError, Result};
use crate::graph::algos::shared::{require_known_start, validate_weights};
use crate::graph::path::reconstruct_path;
use crate::graph::traversal::{GraphProvider, Node};
use crate::graph::types::{SearchStats, ShortestPath, Weight};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance).
///
/// Equal distances fall back to push order, so ties pop first-in-first-out
/// and repeated queries over the same graph are deterministic.
#[derive(Debug, Clone)]
pub struct HeapEntry<N> {
    pub node: N,
    pub distance: Weight,
    pub seq: u64,
}

impl<N> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for HeapEntry<N> {}

impl<N> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// State tracked during a Dijkstra search
struct DijkstraState<N> {
    distances: HashMap<N, Weight>,
    predecessors: HashMap<N, N>,
    heap: BinaryHeap<Reverse<HeapEntry<N>>>,
    settled: Vec<N>,
    next_seq: u64,
    stats: SearchStats,
}

impl<N: Node> DijkstraState<N> {
    fn new(provider: &dyn GraphProvider<N>, start: &N) -> Self {
        let distances = provider
            .nodes()
            .into_iter()
            .map(|node| (node, Weight::INFINITY))
            .collect();

        let mut state = Self {
            distances,
            predecessors: HashMap::new(),
            heap: BinaryHeap::new(),
            settled: Vec::new(),
            next_seq: 0,
            stats: SearchStats::default(),
        };
        state.distances.insert(start.clone(), Weight::ZERO);
        state.push(start.clone(), Weight::ZERO);
        state
    }

    fn push(&mut self, node: N, distance: Weight) {
        self.heap.push(Reverse(HeapEntry {
            node,
            distance,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    fn distance(&self, node: &N) -> Weight {
        self.distances.get(node).copied().unwrap_or(Weight::INFINITY)
    }

    /// Record `candidate` for `neighbor` if it beats the current best.
    ///
    /// A finite distance plus a finite weight can still overflow to infinity;
    /// that would read as unreachable, so it fails instead.
    fn relax(&mut self, current: &N, neighbor: N, candidate: Weight) -> Result<()> {
        if !candidate.is_finite() {
            return Err(GraphError::invalid_value(
                "path cost",
                format!("{} -> {} overflows", current, neighbor),
            ));
        }
        if candidate.total_cmp(&self.distance(&neighbor)) != Ordering::Less {
            return Ok(());
        }
        self.distances.insert(neighbor.clone(), candidate);
        self.predecessors.insert(neighbor.clone(), current.clone());
        self.push(neighbor, candidate);
        self.stats.relaxations += 1;
        Ok(())
    }
}

/// Run the lazy-deletion search loop, stopping once `target` is popped
fn search<N: Node>(
    provider: &dyn GraphProvider<N>,
    start: &N,
    target: Option<&N>,
) -> Result<DijkstraState<N>> {
    require_known_start(provider, start)?;
    validate_weights(provider)?;

    let mut state = DijkstraState::new(provider, start);

    while let Some(Reverse(HeapEntry { node, distance, .. })) = state.heap.pop() {
        state.stats.pops += 1;

        // A cheaper entry for this node was already processed
        if distance.total_cmp(&state.distance(&node)) == Ordering::Greater {
            state.stats.stale_skips += 1;
            continue;
        }

        state.settled.push(node.clone());

        if target == Some(&node) {
            break;
        }

        for (neighbor, weight) in provider.neighbors(&node) {
            state.relax(&node, neighbor, distance + weight)?;
        }
    }

    tracing::debug!(
        pops = state.stats.pops,
        stale_skips = state.stats.stale_skips,
        relaxations = state.stats.relaxations,
        settled = state.settled.len(),
        "dijkstra search complete"
    );

    Ok(state)
}

/// Minimum-weight path from `start` to `end`.
///
/// Every edge weight in the graph must be finite and non-negative; otherwise
/// the query fails with `InvalidWeight` before searching. An unreachable
/// `end` (including one the graph has never seen) is not an error: the
/// result has an empty path and infinite cost.
#[tracing::instrument(skip(provider), fields(start = %start, end = %end))]
pub fn dijkstra<N: Node>(
    provider: &dyn GraphProvider<N>,
    start: &N,
    end: &N,
) -> Result<ShortestPath<N>> {
    let state = search(provider, start, Some(end))?;
    let cost = state.distance(end);
    Ok(reconstruct_path(&state.predecessors, end, cost))
}

/// Like [`dijkstra`], also returning the search counters
pub fn dijkstra_with_stats<N: Node>(
    provider: &dyn GraphProvider<N>,
    start: &N,
    end: &N,
) -> Result<(ShortestPath<N>, SearchStats)> {
    let state = search(provider, start, Some(end))?;
    let cost = state.distance(end);
    Ok((
        reconstruct_path(&state.predecessors, end, cost),
        state.stats,
    ))
}

/// Final distance to every node reachable from `start`, in settle order
/// (non-decreasing distance)
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn dijkstra_distances<N: Node>(
    provider: &dyn GraphProvider<N>,
    start: &N,
) -> Result<Vec<(N, Weight)>> {
    let state = search(provider, start, None)?;
    Ok(state
        .settled
        .iter()
        .map(|node| (node.clone(), state.distance(node)))
        .collect())
}
