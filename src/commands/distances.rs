//! `graphwalk distances` command - weighted distance to every reachable node

use serde::Serialize;

use crate::cli::Cli;
use crate::output_by_format_result;
use graphwalk_core::error::Result;
use graphwalk_core::format::{records_header, records_value};
use graphwalk_core::graph::{dijkstra_distances, Graph, Weight};

#[derive(Debug, Serialize)]
struct DistanceEntry {
    node: String,
    distance: Weight,
}

#[derive(Debug, Serialize)]
struct DistancesOutput {
    start: String,
    distances: Vec<DistanceEntry>,
}

/// Execute the distances command
pub fn execute(cli: &Cli, graph: &Graph<String>, start: &str) -> Result<()> {
    let settled = dijkstra_distances(graph, &start.to_string())?;

    let output = DistancesOutput {
        start: start.to_string(),
        distances: settled
            .into_iter()
            .map(|(node, distance)| DistanceEntry { node, distance })
            .collect(),
    };

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            for entry in &output.distances {
                println!("{}: {}", entry.node, entry.distance);
            }
        },
        records => {
            println!(
                "{}",
                records_header(
                    "distances",
                    &[
                        ("start", output.start.clone()),
                        ("count", output.distances.len().to_string()),
                    ],
                )
            );
            for entry in &output.distances {
                println!("D {} {}", records_value(&entry.node), entry.distance);
            }
        }
    )
}
