//! Graph file loading for commands

use std::time::Instant;

use crate::cli::GraphArgs;
use graphwalk_core::config::GraphFile;
use graphwalk_core::error::Result;
use graphwalk_core::graph::Graph;
use graphwalk_core::trace_time;

/// Load and build the graph named on the command line
pub fn load_graph(args: &GraphArgs) -> Result<Graph<String>> {
    let start = Instant::now();

    let file = GraphFile::load(&args.file)?;
    trace_time!(start, "parse_graph_file");

    let graph = file.build(args.direction_override())?;
    trace_time!(
        start,
        "build_graph",
        nodes = graph.node_count(),
        arcs = graph.edge_count()
    );

    Ok(graph)
}
