//! `graphwalk path` command - fewest hops or cheapest route between two nodes
//!
//! An unreachable target is reported, not treated as an error.

use serde::Serialize;

use crate::cli::Cli;
use crate::output_by_format_result;
use graphwalk_core::bail_usage;
use graphwalk_core::error::Result;
use graphwalk_core::format::{arrow_sequence, records_header, records_value};
use graphwalk_core::graph::{bfs_shortest_path, dijkstra_with_stats, Graph, PathResult, SearchStats};

#[derive(Debug, Clone, Copy, Default)]
pub struct PathOptions {
    pub weighted: bool,
    pub stats: bool,
}

#[derive(Debug, Serialize)]
struct PathOutput {
    #[serde(flatten)]
    result: PathResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<SearchStats>,
}

/// Execute the path command
pub fn execute(
    cli: &Cli,
    graph: &Graph<String>,
    from: &str,
    to: &str,
    options: PathOptions,
) -> Result<()> {
    if options.stats && !options.weighted {
        bail_usage!("--stats requires --weighted");
    }

    let (from, to) = (from.to_string(), to.to_string());
    let output = if options.weighted {
        let (shortest, stats) = dijkstra_with_stats(graph, &from, &to)?;
        PathOutput {
            result: PathResult::from_shortest(&from, &to, &shortest),
            stats: options.stats.then_some(stats),
        }
    } else {
        let path = bfs_shortest_path(graph, &from, &to)?;
        PathOutput {
            result: PathResult::from_hops(&from, &to, path),
            stats: None,
        }
    };

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            print_human(cli, &output);
        },
        records => {
            print_records(&output);
        }
    )
}

fn print_human(cli: &Cli, output: &PathOutput) {
    let result = &output.result;
    if !result.found {
        println!("no path found");
        return;
    }

    println!("{}", arrow_sequence(&result.path));
    if let Some(cost) = result.cost {
        println!("cost: {}", cost);
    }
    if !cli.quiet {
        println!("hops: {}", result.path_length);
    }
    if let Some(stats) = output.stats {
        println!(
            "stats: pops={} stale_skips={} relaxations={}",
            stats.pops, stats.stale_skips, stats.relaxations
        );
    }
}

fn print_records(output: &PathOutput) {
    let result = &output.result;
    let mut fields = vec![
        ("from", result.from.clone()),
        ("to", result.to.clone()),
        ("weighted", result.weighted.to_string()),
        ("found", result.found.to_string()),
    ];
    if result.found {
        fields.push(("hops", result.path_length.to_string()));
    }
    println!("{}", records_header("path", &fields));

    for node in &result.path {
        println!("N {}", records_value(node));
    }
    if let Some(cost) = result.cost.filter(|_| result.found) {
        println!("C {}", cost);
    }
    if let Some(stats) = output.stats {
        println!(
            "S pops={} stale_skips={} relaxations={}",
            stats.pops, stats.stale_skips, stats.relaxations
        );
    }
}
