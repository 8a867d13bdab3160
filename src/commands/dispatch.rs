//! Command dispatch logic for graphwalk

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use graphwalk_core::error::Result;

/// Trace command phase timing at debug level
macro_rules! trace_command {
    ($start:expr, $label:expr) => {
        ::tracing::debug!(elapsed = ?$start.elapsed(), $label);
    };
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let Some(command) = &cli.command else {
        return handle_no_command();
    };

    let result = match command {
        Commands::Show { graph } => {
            let graph = commands::load::load_graph(graph)?;
            trace_command!(start, "load_graph");
            commands::show::execute(cli, &graph)
        }

        Commands::Traverse {
            graph,
            start: from,
            strategy,
        } => {
            let graph = commands::load::load_graph(graph)?;
            trace_command!(start, "load_graph");
            commands::traverse::execute(cli, &graph, from, *strategy)
        }

        Commands::Path {
            graph,
            from,
            to,
            weighted,
            stats,
        } => {
            let graph = commands::load::load_graph(graph)?;
            trace_command!(start, "load_graph");
            let options = commands::path::PathOptions {
                weighted: *weighted,
                stats: *stats,
            };
            commands::path::execute(cli, &graph, from, to, options)
        }

        Commands::Distances { graph, start: from } => {
            let graph = commands::load::load_graph(graph)?;
            trace_command!(start, "load_graph");
            commands::distances::execute(cli, &graph, from)
        }

        Commands::Demo { name } => commands::demo::execute(cli, *name),
    };

    trace_command!(start, "execute_command");
    result
}

fn handle_no_command() -> Result<()> {
    println!("graphwalk {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Graph traversal and shortest paths over adjacency lists.");
    println!();
    println!("Run `graphwalk --help` for usage information.");
    Ok(())
}
