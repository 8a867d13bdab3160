//! Traverse command integration tests

use crate::support::{graphwalk, setup_graphs, stdout_json};
use predicates::prelude::*;

#[test]
fn test_traverse_bfs_default() {
    let dir = setup_graphs();

    graphwalk()
        .current_dir(dir.path())
        .args(["traverse", "tree.json", "A"])
        .assert()
        .success()
        .stdout("A -> B -> C -> D -> E -> F\n");
}

#[test]
fn test_traverse_dfs_preorder() {
    let dir = setup_graphs();

    graphwalk()
        .current_dir(dir.path())
        .args(["traverse", "tree.json", "A", "--strategy", "dfs"])
        .assert()
        .success()
        .stdout("A -> B -> D -> E -> C -> F\n");
}

#[test]
fn test_traverse_dfs_iterative_json() {
    let dir = setup_graphs();

    let output = graphwalk()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "traverse",
            "tree.json",
            "A",
            "-s",
            "dfs-iterative",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["start"], "A");
    assert_eq!(json["strategy"], "dfs-iterative");
    assert_eq!(json["order"].as_array().unwrap().len(), 6);
}

#[test]
fn test_traverse_records() {
    let dir = setup_graphs();

    graphwalk()
        .current_dir(dir.path())
        .args(["--format", "records", "traverse", "tree.json", "C"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H graphwalk=1 kind=traverse start=C strategy=bfs count=6\nN C\nN A\nN F\n",
        ));
}

#[test]
fn test_traverse_unknown_start() {
    let dir = setup_graphs();

    graphwalk()
        .current_dir(dir.path())
        .args(["traverse", "tree.json", "Z"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown start node: Z"));
}

#[test]
fn test_traverse_unknown_start_json_error() {
    let dir = setup_graphs();

    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "traverse", "tree.json", "Z"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let error: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(error["error"]["type"], "unknown_node");
}

#[test]
fn test_traverse_bad_strategy() {
    let dir = setup_graphs();

    graphwalk()
        .current_dir(dir.path())
        .args(["traverse", "tree.json", "A", "--strategy", "astar"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown strategy"));
}
