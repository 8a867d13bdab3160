//! Distances command integration tests

use crate::support::{graphwalk, setup_graphs, stdout_json};

#[test]
fn test_distances_in_settle_order() {
    let dir = setup_graphs();

    graphwalk()
        .current_dir(dir.path())
        .args(["distances", "city.toml", "Home"])
        .assert()
        .success()
        .stdout("Home: 0\nB: 2\nC: 4\nA: 5\nOffice: 6\n");
}

#[test]
fn test_distances_records() {
    let dir = setup_graphs();

    graphwalk()
        .current_dir(dir.path())
        .args(["--format", "records", "distances", "city.toml", "Office"])
        .assert()
        .success()
        .stdout(
            "H graphwalk=1 kind=distances start=Office count=5\n\
             D Office 0\nD C 2\nD B 4\nD Home 6\nD A 10\n",
        );
}

#[test]
fn test_distances_json_skips_unreachable() {
    let dir = setup_graphs();

    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "distances", "tree.json", "B", "--directed"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    let nodes: Vec<&str> = json["distances"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["node"].as_str().unwrap())
        .collect();
    assert_eq!(nodes, vec!["B", "D", "E"]);
    assert_eq!(json["distances"][1]["distance"], 1.0);
}
