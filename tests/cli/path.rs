//! Path command integration tests

use crate::support::{graphwalk, setup_graphs, stdout_json, write_graph};
use predicates::prelude::*;

#[test]
fn test_path_fewest_hops() {
    let dir = setup_graphs();

    graphwalk()
        .current_dir(dir.path())
        .args(["path", "city.toml", "Home", "Office"])
        .assert()
        .success()
        .stdout("Home -> A -> Office\nhops: 2\n");
}

#[test]
fn test_path_weighted_prefers_cheaper_route() {
    let dir = setup_graphs();

    graphwalk()
        .current_dir(dir.path())
        .args(["path", "city.toml", "Home", "Office", "--weighted"])
        .assert()
        .success()
        .stdout("Home -> B -> C -> Office\ncost: 6\nhops: 3\n");
}

#[test]
fn test_path_weighted_records() {
    let dir = setup_graphs();

    graphwalk()
        .current_dir(dir.path())
        .args([
            "--format", "records", "path", "city.toml", "Home", "Office", "-w",
        ])
        .assert()
        .success()
        .stdout(
            "H graphwalk=1 kind=path from=Home to=Office weighted=true found=true hops=3\n\
             N Home\nN B\nN C\nN Office\nC 6\n",
        );
}

#[test]
fn test_path_unreachable_is_not_an_error() {
    let dir = setup_graphs();

    graphwalk()
        .current_dir(dir.path())
        .args(["path", "tree.json", "D", "A", "--directed"])
        .assert()
        .success()
        .stdout("no path found\n");

    graphwalk()
        .current_dir(dir.path())
        .args(["--format", "records", "path", "tree.json", "D", "A", "--directed"])
        .assert()
        .success()
        .stdout("H graphwalk=1 kind=path from=D to=A weighted=false found=false\n");
}

#[test]
fn test_path_unreachable_weighted_json() {
    let dir = setup_graphs();

    let output = graphwalk()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "path",
            "city.toml",
            "Home",
            "Nowhere",
            "--weighted",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert!(json["cost"].is_null());
    assert_eq!(json["path"].as_array().unwrap().len(), 0);
}

#[test]
fn test_path_stats() {
    let dir = setup_graphs();

    graphwalk()
        .current_dir(dir.path())
        .args(["path", "city.toml", "Home", "Office", "--weighted", "--stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stats: pops="))
        .stdout(predicate::str::contains("relaxations="));

    let output = graphwalk()
        .current_dir(dir.path())
        .args([
            "--format", "json", "path", "city.toml", "Home", "Office", "-w", "--stats",
        ])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert!(json["stats"]["pops"].as_u64().unwrap() >= 4);
}

#[test]
fn test_path_stats_requires_weighted() {
    let dir = setup_graphs();

    graphwalk()
        .current_dir(dir.path())
        .args(["path", "city.toml", "Home", "Office", "--stats"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--stats requires --weighted"));
}

#[test]
fn test_path_negative_weight_is_data_error() {
    let dir = tempfile::tempdir().unwrap();
    write_graph(
        dir.path(),
        "neg.json",
        r#"{"edges": [{"from": "A", "to": "B", "weight": 1}, {"from": "B", "to": "C", "weight": -2}]}"#,
    );

    graphwalk()
        .current_dir(dir.path())
        .args(["path", "neg.json", "A", "C", "--weighted"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid weight -2"));

    // Hop-count search ignores weights
    graphwalk()
        .current_dir(dir.path())
        .args(["path", "neg.json", "A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A -> B -> C\n"));
}

#[test]
fn test_path_unknown_start() {
    let dir = setup_graphs();

    graphwalk()
        .current_dir(dir.path())
        .args(["path", "city.toml", "Mars", "Home", "--weighted"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown start node: Mars"));
}
