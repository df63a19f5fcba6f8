//! viajar CLI - time-bounded 2-opt local search for the TSP.

use std::process::ExitCode;

use viajar::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(Args::parse())
}
