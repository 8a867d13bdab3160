//! Graphwalk - graph traversal and shortest-path CLI
//!
//! Loads a graph description file, runs BFS, DFS or Dijkstra over it,
//! and prints the result as human text, JSON or line records.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use graphwalk_core::error::GraphError;
use graphwalk_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&cli, &e);
            exit_with(&e)
        }
    }
}

/// Clap failed before `Cli.format` existed; honor `--format json` from argv
fn parse_failure(err: clap::Error) -> ExitCode {
    let informational = matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
    if informational || !argv_requests_json() {
        err.exit();
    }

    let error = GraphError::UsageError(err.to_string());
    eprintln!("{}", error.to_json());
    exit_with(&error)
}

fn report(cli: &Cli, error: &GraphError) {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", error);
    }
}

fn exit_with(error: &GraphError) -> ExitCode {
    ExitCode::from(i32::from(error.exit_code()) as u8)
}

/// Whether argv asks for JSON output, in either `--format json` or `--format=json` form
fn argv_requests_json() -> bool {
    let args: Vec<String> = env::args().skip(1).collect();
    args.iter().any(|arg| arg == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}
