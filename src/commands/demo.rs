//! `graphwalk demo` command - built-in walkthroughs
//!
//! Each demo builds a small graph in memory, runs the algorithms it is meant
//! to contrast, and renders them in the selected format.

use serde::Serialize;

use crate::cli::{Cli, DemoName};
use crate::output_by_format_result;
use graphwalk_core::error::Result;
use graphwalk_core::format::{arrow_sequence, records_header, records_value};
use graphwalk_core::graph::{
    bfs_shortest_path, dijkstra, traverse, Graph, PathResult, Strategy, TraversalResult,
};

#[derive(Debug, Serialize)]
struct DemoReport {
    name: &'static str,
    title: &'static str,
    adjacency: Vec<String>,
    traversals: Vec<TraversalResult>,
    paths: Vec<PathResult>,
}

impl DemoReport {
    fn new(name: &'static str, title: &'static str, graph: &Graph<String>) -> Self {
        DemoReport {
            name,
            title,
            adjacency: graph.to_string().lines().map(str::to_string).collect(),
            traversals: Vec::new(),
            paths: Vec::new(),
        }
    }
}

fn string_graph(directed: bool, edges: &[(&str, &str, u32)]) -> Graph<String> {
    Graph::from_edges(
        directed,
        edges
            .iter()
            .map(|&(u, v, w)| (u.to_string(), v.to_string(), w)),
    )
}

/// Friends of friends: BFS spreads in layers, DFS follows one chain first
fn social_network() -> Result<DemoReport> {
    let graph = string_graph(
        false,
        &[
            ("Alice", "Bob", 1),
            ("Alice", "Charlie", 1),
            ("Bob", "Dave", 1),
            ("Charlie", "Eve", 1),
            ("Dave", "Eve", 1),
        ],
    );
    let alice = "Alice".to_string();

    let mut report = DemoReport::new("social", "Social network", &graph);
    report.traversals.push(traverse(&graph, &alice, Strategy::Bfs)?);
    report
        .traversals
        .push(traverse(&graph, &alice, Strategy::DfsRecursive)?);
    Ok(report)
}

/// The direct road is not the fastest one
fn gps_map() -> Result<DemoReport> {
    let graph = string_graph(
        false,
        &[
            ("Home", "A", 5),
            ("Home", "B", 2),
            ("A", "Office", 10),
            ("B", "C", 2),
            ("C", "Office", 2),
        ],
    );
    let (home, office) = ("Home".to_string(), "Office".to_string());

    let mut report = DemoReport::new("gps", "GPS route finder", &graph);
    let shortest = dijkstra(&graph, &home, &office)?;
    report
        .paths
        .push(PathResult::from_shortest(&home, &office, &shortest));
    Ok(report)
}

/// A-F tree walked three ways, then a long loop back to D for BFS to ignore
fn tree_with_loop() -> Result<DemoReport> {
    let mut graph = string_graph(
        false,
        &[
            ("A", "B", 1),
            ("A", "C", 1),
            ("B", "D", 1),
            ("B", "E", 1),
            ("C", "F", 1),
        ],
    );
    let (a, d) = ("A".to_string(), "D".to_string());

    let mut traversals = Vec::new();
    for strategy in [Strategy::Bfs, Strategy::DfsRecursive, Strategy::DfsIterative] {
        traversals.push(traverse(&graph, &a, strategy)?);
    }

    for (u, v) in [("F", "G"), ("G", "H"), ("H", "D")] {
        graph.add_unweighted_edge(u.to_string(), v.to_string());
    }

    let mut report = DemoReport::new("tree", "Tree with a long loop", &graph);
    report.traversals = traversals;
    let path = bfs_shortest_path(&graph, &a, &d)?;
    report.paths.push(PathResult::from_hops(&a, &d, path));
    Ok(report)
}

fn run_demo(name: DemoName) -> Result<DemoReport> {
    match name {
        DemoName::Social => social_network(),
        DemoName::Gps => gps_map(),
        DemoName::Tree => tree_with_loop(),
    }
}

/// Execute the demo command
pub fn execute(cli: &Cli, name: Option<DemoName>) -> Result<()> {
    let names = match name {
        Some(name) => vec![name],
        None => vec![DemoName::Social, DemoName::Gps, DemoName::Tree],
    };

    let reports = names
        .into_iter()
        .map(run_demo)
        .collect::<Result<Vec<_>>>()?;

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
            Ok(())
        },
        human => {
            for report in &reports {
                print_human(cli, report);
            }
        },
        records => {
            for report in &reports {
                print_records(report);
            }
        }
    )
}

fn print_human(cli: &Cli, report: &DemoReport) {
    println!("========== {} ==========", report.title);
    if !cli.quiet {
        for line in &report.adjacency {
            println!("{}", line);
        }
        println!();
    }

    for traversal in &report.traversals {
        println!(
            "{} from {}: {}",
            traversal.strategy,
            traversal.start,
            arrow_sequence(&traversal.order)
        );
    }

    for path in &report.paths {
        if !path.found {
            println!("{} -> {}: no path found", path.from, path.to);
            continue;
        }
        match path.cost {
            Some(cost) => println!(
                "route {} -> {}: {} (cost: {})",
                path.from,
                path.to,
                arrow_sequence(&path.path),
                cost
            ),
            None => println!(
                "fewest hops {} -> {}: {} ({} hops)",
                path.from,
                path.to,
                arrow_sequence(&path.path),
                path.path_length
            ),
        }
    }
    println!();
}

fn print_records(report: &DemoReport) {
    for line in records_lines(report) {
        println!("{}", line);
    }
}

/// Join node names as one records field, quoting each name as needed
fn records_list(nodes: &[String]) -> String {
    nodes
        .iter()
        .map(|node| records_value(node))
        .collect::<Vec<_>>()
        .join(",")
}

fn records_lines(report: &DemoReport) -> Vec<String> {
    let mut lines = vec![records_header("demo", &[("name", report.name.to_string())])];

    for traversal in &report.traversals {
        lines.push(format!(
            "T {} {} {}",
            traversal.strategy,
            records_value(&traversal.start),
            records_list(&traversal.order)
        ));
    }

    for path in &report.paths {
        let nodes = if path.found {
            records_list(&path.path)
        } else {
            "-".to_string()
        };
        let (from, to) = (records_value(&path.from), records_value(&path.to));
        lines.push(match path.cost.filter(|_| path.found) {
            Some(cost) => format!("P {} {} {} cost={}", from, to, nodes, cost),
            None => format!("P {} {} {}", from, to, nodes),
        });
    }

    lines
}
