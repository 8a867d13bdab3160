//! `graphwalk traverse` command - visit order from a start node

use crate::cli::Cli;
use crate::output_by_format_result;
use graphwalk_core::error::Result;
use graphwalk_core::format::{arrow_sequence, records_header, records_value};
use graphwalk_core::graph::{traverse, Graph, Strategy};

/// Execute the traverse command
pub fn execute(cli: &Cli, graph: &Graph<String>, start: &str, strategy: Strategy) -> Result<()> {
    let result = traverse(graph, &start.to_string(), strategy)?;

    tracing::debug!(
        strategy = %strategy,
        visited = result.order.len(),
        "traversal complete"
    );

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        },
        human => {
            println!("{}", arrow_sequence(&result.order));
        },
        records => {
            println!(
                "{}",
                records_header(
                    "traverse",
                    &[
                        ("start", result.start.clone()),
                        ("strategy", result.strategy.to_string()),
                        ("count", result.order.len().to_string()),
                    ],
                )
            );
            for node in &result.order {
                println!("N {}", records_value(node));
            }
        }
    )
}
