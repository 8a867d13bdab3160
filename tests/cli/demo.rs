//! Demo command integration tests

use crate::support::{graphwalk, stdout_json};
use predicates::prelude::*;

#[test]
fn test_demo_runs_all_walkthroughs() {
    graphwalk()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("========== Social network =========="))
        .stdout(predicate::str::contains(
            "bfs from Alice: Alice -> Bob -> Charlie -> Dave -> Eve",
        ))
        .stdout(predicate::str::contains(
            "dfs-recursive from Alice: Alice -> Bob -> Dave -> Eve -> Charlie",
        ))
        .stdout(predicate::str::contains(
            "route Home -> Office: Home -> B -> C -> Office (cost: 6)",
        ))
        .stdout(predicate::str::contains(
            "fewest hops A -> D: A -> B -> D (2 hops)",
        ));
}

#[test]
fn test_demo_single_json() {
    let output = graphwalk()
        .args(["--format", "json", "demo", "gps"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    let reports = json.as_array().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["name"], "gps");
    assert_eq!(reports[0]["paths"][0]["cost"], 6.0);
    assert_eq!(reports[0]["paths"][0]["path"][1], "B");
}

#[test]
fn test_demo_tree_records() {
    graphwalk()
        .args(["--format", "records", "demo", "tree"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H graphwalk=1 kind=demo name=tree\n"))
        .stdout(predicate::str::contains("T dfs-recursive A A,B,D,E,C,F"))
        .stdout(predicate::str::contains("P A D A,B,D"));
}

#[test]
fn test_demo_unknown_name() {
    graphwalk().args(["demo", "maze"]).assert().code(2);
}
