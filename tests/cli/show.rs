//! Show command integration tests

use crate::support::{graphwalk, setup_graphs, stdout_json, write_graph};
use predicates::prelude::*;

#[test]
fn test_show_adjacency_list() {
    let dir = setup_graphs();

    graphwalk()
        .current_dir(dir.path())
        .args(["show", "city.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Home connects to -> [(A, 5), (B, 2)]",
        ))
        .stdout(predicate::str::contains(
            "Office connects to -> [(A, 10), (C, 2)]",
        ))
        .stdout(predicate::str::contains("5 nodes, 10 arcs (undirected)"));
}

#[test]
fn test_show_quiet_omits_summary() {
    let dir = setup_graphs();

    graphwalk()
        .current_dir(dir.path())
        .args(["--quiet", "show", "city.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("arcs").not());
}

#[test]
fn test_show_directed_override() {
    let dir = setup_graphs();

    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "show", "city.toml", "--directed"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["directed"], true);
    assert_eq!(json["edge_count"], 5);
    assert_eq!(json["nodes"][0]["node"], "Home");
    assert_eq!(json["nodes"][0]["neighbors"][1]["weight"], 2.0);
}

#[test]
fn test_show_records() {
    let dir = setup_graphs();

    graphwalk()
        .current_dir(dir.path())
        .args(["--format", "records", "show", "tree.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H graphwalk=1 kind=graph directed=false nodes=6 arcs=10",
        ))
        .stdout(predicate::str::contains("E A B 1"));
}

#[test]
fn test_show_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    write_graph(
        dir.path(),
        "g.yml",
        "directed: true\nedges:\n  - {from: X, to: Y, weight: 1.5}\n",
    );

    graphwalk()
        .current_dir(dir.path())
        .args(["show", "g.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("X connects to -> [(Y, 1.5)]"))
        .stdout(predicate::str::contains("Y connects to -> []"));
}

#[test]
fn test_show_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    write_graph(dir.path(), "g.csv", "A,B\n");

    graphwalk()
        .current_dir(dir.path())
        .args(["show", "g.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported graph file extension"));
}

#[test]
fn test_show_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    graphwalk()
        .current_dir(dir.path())
        .args(["show", "missing.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_show_rejects_non_finite_weight() {
    let dir = tempfile::tempdir().unwrap();
    write_graph(
        dir.path(),
        "g.toml",
        "[[edges]]\nfrom = \"A\"\nto = \"B\"\nweight = inf\n",
    );

    graphwalk()
        .current_dir(dir.path())
        .args(["show", "g.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid edge weight"));
}
