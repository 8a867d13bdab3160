//! `graphwalk show` command - print a graph's adjacency list

use serde::Serialize;

use crate::cli::Cli;
use crate::output_by_format_result;
use graphwalk_core::error::Result;
use graphwalk_core::format::{records_header, records_value};
use graphwalk_core::graph::{Graph, Weight};

#[derive(Debug, Serialize)]
struct NeighborEntry<'a> {
    node: &'a str,
    weight: Weight,
}

#[derive(Debug, Serialize)]
struct NodeEntry<'a> {
    node: &'a str,
    neighbors: Vec<NeighborEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct GraphSummary<'a> {
    directed: bool,
    node_count: usize,
    edge_count: usize,
    nodes: Vec<NodeEntry<'a>>,
}

fn summarize(graph: &Graph<String>) -> GraphSummary<'_> {
    let nodes = graph
        .nodes()
        .map(|node| NodeEntry {
            node: node.as_str(),
            neighbors: graph
                .neighbors(node)
                .into_iter()
                .map(|(neighbor, weight)| NeighborEntry {
                    node: neighbor.as_str(),
                    weight,
                })
                .collect(),
        })
        .collect();

    GraphSummary {
        directed: graph.is_directed(),
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        nodes,
    }
}

/// Execute the show command
pub fn execute(cli: &Cli, graph: &Graph<String>) -> Result<()> {
    let summary = summarize(graph);

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        },
        human => {
            print!("{}", graph);
            if !cli.quiet {
                println!();
                println!(
                    "{} nodes, {} arcs ({})",
                    summary.node_count,
                    summary.edge_count,
                    if summary.directed { "directed" } else { "undirected" }
                );
            }
        },
        records => {
            println!(
                "{}",
                records_header(
                    "graph",
                    &[
                        ("directed", summary.directed.to_string()),
                        ("nodes", summary.node_count.to_string()),
                        ("arcs", summary.edge_count.to_string()),
                    ],
                )
            );
            for entry in &summary.nodes {
                println!("N {}", records_value(entry.node));
                for neighbor in &entry.neighbors {
                    println!(
                        "E {} {} {}",
                        records_value(entry.node),
                        records_value(neighbor.node),
                        neighbor.weight
                    );
                }
            }
        }
    )
}
