use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for graphwalk
pub fn graphwalk() -> Command {
    cargo_bin_cmd!("graphwalk")
}

pub const CITY_MAP_TOML: &str = r#"
directed = false

[[edges]]
from = "Home"
to = "A"
weight = 5

[[edges]]
from = "Home"
to = "B"
weight = 2

[[edges]]
from = "A"
to = "Office"
weight = 10

[[edges]]
from = "B"
to = "C"
weight = 2

[[edges]]
from = "C"
to = "Office"
weight = 2
"#;

pub const TREE_JSON: &str = r#"{
  "edges": [
    {"from": "A", "to": "B"},
    {"from": "A", "to": "C"},
    {"from": "B", "to": "D"},
    {"from": "B", "to": "E"},
    {"from": "C", "to": "F"}
  ]
}"#;

/// Write a graph file into `dir` and return its path
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write graph file");
    path
}

/// Temporary directory holding `city.toml` and `tree.json`
pub fn setup_graphs() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_graph(dir.path(), "city.toml", CITY_MAP_TOML);
    write_graph(dir.path(), "tree.json", TREE_JSON);
    dir
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is valid JSON")
}
