//! Graph file configuration for graphwalk
//!
//! A graph file lists the directed flag and the edges to insert. The format
//! follows the file extension: `.toml`, `.json`, `.yaml` or `.yml`.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::graph::Graph;

pub use types::{EdgeEntry, FileFormat, GraphFile, GRAPH_FORMAT_VERSION};

impl FileFormat {
    /// Pick the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "toml" => Ok(FileFormat::Toml),
            "json" => Ok(FileFormat::Json),
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            _ => crate::bail_unsupported!(
                "graph file extension",
                path.display(),
                FileFormat::SUPPORTED
            ),
        }
    }
}

impl GraphFile {
    /// Parse graph file content in the given format
    pub fn parse(content: &str, format: FileFormat) -> Result<Self> {
        let file: GraphFile = match format {
            FileFormat::Toml => toml::from_str(content)?,
            FileFormat::Json => serde_json::from_str(content)?,
            FileFormat::Yaml => serde_yaml::from_str(content)?,
        };

        if file.version != GRAPH_FORMAT_VERSION {
            crate::bail_unsupported!("graph file version", file.version, GRAPH_FORMAT_VERSION);
        }

        Ok(file)
    }

    /// Load a graph file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let format = FileFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        let file = Self::parse(&content, format)?;

        tracing::debug!(
            path = %path.display(),
            edges = file.edges.len(),
            directed = file.directed,
            "loaded graph file"
        );
        Ok(file)
    }

    /// Serialize in the given format
    pub fn render(&self, format: FileFormat) -> Result<String> {
        match format {
            FileFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| GraphError::Other(format!("failed to serialize graph file: {}", e))),
            FileFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            FileFormat::Yaml => Ok(serde_yaml::to_string(self)?),
        }
    }

    /// Save to disk in the format implied by the extension
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.render(FileFormat::from_path(path)?)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Append an edge entry
    pub fn push_edge(&mut self, from: &str, to: &str, weight: Option<f64>) {
        self.edges.push(EdgeEntry {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        });
    }

    /// Build the graph, inserting edges in file order.
    ///
    /// `directed` overrides the file's own flag when set. Negative weights
    /// are kept; shortest-path queries reject them at query time.
    pub fn build(&self, directed: Option<bool>) -> Result<Graph<String>> {
        if !self.default_weight.is_finite() {
            crate::bail_invalid!("default_weight", self.default_weight);
        }

        let mut graph = Graph::new(directed.unwrap_or(self.directed));
        for edge in &self.edges {
            let weight = edge.weight.unwrap_or(self.default_weight);
            if !weight.is_finite() {
                crate::bail_invalid!(
                    "edge weight",
                    format!("{} -> {}: {}", edge.from, edge.to, weight)
                );
            }
            graph.add_edge(edge.from.clone(), edge.to.clone(), weight);
        }

        Ok(graph)
    }
}
