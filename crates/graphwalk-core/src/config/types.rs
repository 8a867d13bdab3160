//! Graph file type definitions

use serde::{Deserialize, Serialize};

/// Current graph file format version
pub const GRAPH_FORMAT_VERSION: u32 = 1;

/// On-disk description of a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    /// File format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Whether edges are one-way
    #[serde(default)]
    pub directed: bool,

    /// Weight for edges that do not set one
    #[serde(default = "default_weight")]
    pub default_weight: f64,

    /// Edges, inserted in file order
    #[serde(default)]
    pub edges: Vec<EdgeEntry>,
}

impl Default for GraphFile {
    fn default() -> Self {
        GraphFile {
            version: GRAPH_FORMAT_VERSION,
            directed: false,
            default_weight: default_weight(),
            edges: Vec::new(),
        }
    }
}

/// A single edge in a graph file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeEntry {
    pub from: String,
    pub to: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Serialization format of a graph file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
    Yaml,
}

impl FileFormat {
    pub const SUPPORTED: &'static str = "toml, json, yaml, yml";
}

fn default_version() -> u32 {
    GRAPH_FORMAT_VERSION
}

fn default_weight() -> f64 {
    1.0
}
