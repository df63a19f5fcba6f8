//! CLI command handlers.
//!
//! Execution logic for each CLI command, extracted from main.rs so the
//! wiring from parsed arguments to the search library stays testable.

use std::path::Path;
use std::process::ExitCode;

use crate::config::{DriverKind, SearchConfig};
use crate::engine::rng::SearchRng;
use crate::error::SearchResult;
use crate::instance;
use crate::report::SearchReport;
use crate::search::{CostTrace, ExhaustiveDescent, StochasticSearch};
use crate::tour::Tour;

use super::{Args, Command};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Solve {
            instance_path,
            time_limit_secs,
            seed,
            acceptance,
            driver,
            opt_tour_path,
            json,
        } => {
            let config = SearchConfig {
                seed: seed.unwrap_or_else(|| SearchConfig::default().seed),
                time_limit_secs,
                acceptance_probability: acceptance
                    .unwrap_or(StochasticSearch::DEFAULT_ACCEPTANCE),
                driver,
            };
            run_fallible(|| solve(&instance_path, &config, opt_tour_path.as_deref(), json))
        }
        Command::Score {
            instance_path,
            tour_path,
        } => run_fallible(|| score(&instance_path, &tour_path)),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

fn run_fallible(f: impl FnOnce() -> SearchResult<()>) -> ExitCode {
    match f() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Run a search on a TSPLIB instance and print the report.
fn solve(
    instance_path: &Path,
    config: &SearchConfig,
    opt_tour_path: Option<&Path>,
    json: bool,
) -> SearchResult<()> {
    let instance = instance::load_tsplib(instance_path)?;
    let matrix = instance.distance_matrix()?;
    let mut rng = SearchRng::new(config.seed);

    if !json {
        let label = if instance.name.is_empty() {
            instance_path.display().to_string()
        } else {
            instance.name.clone()
        };
        println!(
            "Solving {label} ({} points) with the {} driver, budget {:.1}s, seed {}",
            matrix.len(),
            config.driver,
            config.time_limit_secs,
            config.seed
        );
    }

    let (best, trace) = match config.driver {
        DriverKind::Stochastic => {
            StochasticSearch::new(config.time_limit_secs, config.acceptance_probability)?
                .run(&matrix, None, &mut rng)?
        }
        DriverKind::Descent => {
            let initial = Tour::random(matrix.len(), &mut rng);
            let (best, _) = ExhaustiveDescent::new(config.time_limit_secs).run(initial, &matrix)?;
            (best, CostTrace::new())
        }
    };

    let cost = matrix.tour_cost(&best);
    let mut report = SearchReport::new(best, cost, trace);

    if let Some(path) = opt_tour_path {
        let reference = instance::load_opt_tour(path)?;
        report = report.with_reference(matrix.tour_cost(&reference));
    }

    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }
    Ok(())
}

/// Score an externally supplied 1-indexed tour against an instance.
fn score(instance_path: &Path, tour_path: &Path) -> SearchResult<()> {
    let instance = instance::load_tsplib(instance_path)?;
    let matrix = instance.distance_matrix()?;
    let tour = instance::load_opt_tour(tour_path)?;

    println!("Tour: {tour}");
    println!("Total distance: {:.4}", matrix.tour_cost(&tour));
    Ok(())
}

/// Print usage information.
pub fn print_help() {
    println!("viajar - time-bounded 2-opt local search for the TSP");
    println!();
    println!("Usage:");
    println!("  viajar solve <instance.tsp> [options]");
    println!("  viajar score <instance.tsp> <tour-file>");
    println!();
    println!("Solve options:");
    println!("  --time-limit <secs>   Wall-clock budget (default 60)");
    println!("  --seed <n>            RNG seed (default 42)");
    println!("  --acceptance <p>      Non-improving acceptance probability (default 1e-5)");
    println!("  --descent             Use the exhaustive first-improvement driver");
    println!("  --opt-tour <file>     Reference tour for gap reporting");
    println!("  --json                Emit the full report as JSON");
    println!();
    println!("  viajar help           Show this message");
    println!("  viajar version        Show version");
}

/// Print version information.
pub fn print_version() {
    println!("viajar v{}", env!("CARGO_PKG_VERSION"));
}
