use serde::{Serialize, Serializer};
use std::fmt;

/// Cost of traversing a single edge.
///
/// Unweighted insertion uses [`Weight::UNIT`]. Path costs are sums of
/// edge weights; an unreachable target has cost [`Weight::INFINITY`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    pub const UNIT: Weight = Weight(1.0);
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    pub fn new(value: f64) -> Self {
        Weight(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Whether the weight satisfies the shortest-path precondition
    pub fn is_valid_cost(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// Total order usable by heaps; NaN sorts above every number
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::UNIT
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl From<u32> for Weight {
    fn from(value: u32) -> Self {
        Weight(value as f64)
    }
}

impl From<i32> for Weight {
    fn from(value: i32) -> Self {
        Weight(value as f64)
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Weight(value)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_infinite() {
            let sign = if self.0 < 0.0 { "-" } else { "" };
            write!(f, "{sign}inf")
        } else if self.0.fract() == 0.0 && self.0.abs() < 1e15 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

/// Traversal strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Queue-based breadth-first, layer by layer
    #[default]
    Bfs,
    /// Pre-order depth-first, neighbors in forward order
    DfsRecursive,
    /// Stack-based depth-first, visited on pop
    DfsIterative,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::DfsRecursive => "dfs-recursive",
            Strategy::DfsIterative => "dfs-iterative",
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" | "dfs-recursive" => Ok(Strategy::DfsRecursive),
            "dfs-iterative" => Ok(Strategy::DfsIterative),
            other => Err(format!(
                "unknown strategy '{}' (expected: bfs, dfs, dfs-iterative)",
                other
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weighted shortest path between two nodes.
///
/// An unreachable target yields an empty `path` and infinite `cost`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<N> {
    pub path: Vec<N>,
    pub cost: Weight,
}

impl<N> ShortestPath<N> {
    pub fn unreachable() -> Self {
        ShortestPath {
            path: Vec::new(),
            cost: Weight::INFINITY,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Counters collected while running a priority-queue search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Entries popped from the heap, stale ones included
    pub pops: usize,
    /// Popped entries discarded because a cheaper distance was already final
    pub stale_skips: usize,
    /// Successful distance improvements
    pub relaxations: usize,
}

/// Traversal output for rendering
#[derive(Debug, Clone, Serialize)]
pub struct TraversalResult {
    pub start: String,
    pub strategy: Strategy,
    pub order: Vec<String>,
}

/// Path output for rendering
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub weighted: bool,
    pub found: bool,
    pub path: Vec<String>,
    pub path_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Weight>,
}

impl PathResult {
    /// Build from an unweighted BFS path (`None` when unreachable)
    pub fn from_hops<N: fmt::Display>(from: &N, to: &N, path: Option<Vec<N>>) -> Self {
        let path: Vec<String> = path
            .unwrap_or_default()
            .iter()
            .map(|n| n.to_string())
            .collect();
        PathResult {
            from: from.to_string(),
            to: to.to_string(),
            weighted: false,
            found: !path.is_empty(),
            path_length: path.len().saturating_sub(1),
            path,
            cost: None,
        }
    }

    /// Build from a weighted Dijkstra result
    pub fn from_shortest<N: fmt::Display>(from: &N, to: &N, shortest: &ShortestPath<N>) -> Self {
        PathResult {
            from: from.to_string(),
            to: to.to_string(),
            weighted: true,
            found: shortest.is_reachable(),
            path: shortest.path.iter().map(|n| n.to_string()).collect(),
            path_length: shortest.hops(),
            cost: Some(shortest.cost),
        }
    }
}
