//! CLI argument parsing for graphwalk
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod format;
pub mod parse;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::Strategy;
use parse::{parse_output_format, parse_strategy};

/// Graphwalk - BFS, DFS and Dijkstra over adjacency-list graphs
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `graphwalk_core=trace`)
    #[arg(long, global = true, env = "GRAPHWALK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Graph file input shared by every graph command
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph description file (.toml, .json, .yaml, .yml)
    pub file: PathBuf,

    /// Treat edges as one-way, overriding the file
    #[arg(long, conflicts_with = "undirected")]
    pub directed: bool,

    /// Treat edges as two-way, overriding the file
    #[arg(long)]
    pub undirected: bool,
}

impl GraphArgs {
    /// Direction requested on the command line, if any
    pub fn direction_override(&self) -> Option<bool> {
        match (self.directed, self.undirected) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Built-in demonstrations
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoName {
    /// Social network: BFS layers versus DFS deep-dive
    Social,
    /// City map: weighted shortest route
    Gps,
    /// A-F tree with a long loop: traversal orders and fewest hops
    Tree,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the adjacency list of a graph file
    Show {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Visit every node reachable from START
    Traverse {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start node
        start: String,

        /// Traversal strategy (bfs, dfs, dfs-iterative)
        #[arg(long, short, default_value = "bfs", value_parser = parse_strategy)]
        strategy: Strategy,
    },

    /// Find a path between two nodes
    Path {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start node
        from: String,

        /// Target node
        to: String,

        /// Minimize total weight (Dijkstra) instead of hop count
        #[arg(long, short)]
        weighted: bool,

        /// Report priority-queue counters (requires --weighted)
        #[arg(long)]
        stats: bool,
    },

    /// Weighted distance from START to every reachable node
    Distances {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start node
        start: String,
    },

    /// Run the built-in demonstrations
    Demo {
        /// Run only this demonstration
        #[arg(value_enum)]
        name: Option<DemoName>,
    },
}
