//! CLI argument parsing.
//!
//! This module provides the argument parser for the viajar CLI.
//! Extracted to enable comprehensive testing of argument parsing logic.

use std::path::PathBuf;

use crate::config::DriverKind;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run a search on a TSPLIB instance
    Solve {
        /// Path to the TSPLIB instance file.
        instance_path: PathBuf,
        /// Wall-clock budget in seconds.
        time_limit_secs: f64,
        /// Optional seed override.
        seed: Option<u64>,
        /// Optional acceptance probability override.
        acceptance: Option<f64>,
        /// Driver selection.
        driver: DriverKind,
        /// Optional reference tour for gap reporting.
        opt_tour_path: Option<PathBuf>,
        /// Emit the full report as JSON instead of a text summary.
        json: bool,
    },
    /// Score an externally supplied tour against an instance
    Score {
        /// Path to the TSPLIB instance file.
        instance_path: PathBuf,
        /// Path to the 1-indexed tour file.
        tour_path: PathBuf,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

/// Default wall-clock budget when none is given.
const DEFAULT_TIME_LIMIT_SECS: f64 = 60.0;

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// This method is testable as it accepts any iterator of strings,
    /// not just `std::env::args()`.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "solve" => Self::parse_solve_command(args),
            "score" => Self::parse_score_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'solve' command arguments.
    fn parse_solve_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'solve' command requires an instance path");
            return Command::Help;
        }

        let instance_path = PathBuf::from(&args[2]);
        let mut time_limit_secs = DEFAULT_TIME_LIMIT_SECS;
        let mut seed = None;
        let mut acceptance = None;
        let mut driver = DriverKind::default();
        let mut opt_tour_path = None;
        let mut json = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--time-limit" => {
                    if let Some(value) = Self::take_value(args, i) {
                        if let Ok(seconds) = value.parse() {
                            time_limit_secs = seconds;
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--seed" => {
                    if let Some(value) = Self::take_value(args, i) {
                        if let Ok(parsed) = value.parse() {
                            seed = Some(parsed);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--acceptance" => {
                    if let Some(value) = Self::take_value(args, i) {
                        if let Ok(parsed) = value.parse() {
                            acceptance = Some(parsed);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--descent" => {
                    driver = DriverKind::Descent;
                    i += 1;
                }
                "--opt-tour" => {
                    if let Some(value) = Self::take_value(args, i) {
                        opt_tour_path = Some(PathBuf::from(value));
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--json" => {
                    json = true;
                    i += 1;
                }
                unknown => {
                    eprintln!("Unknown option for 'solve': {unknown}");
                    i += 1;
                }
            }
        }

        Command::Solve {
            instance_path,
            time_limit_secs,
            seed,
            acceptance,
            driver,
            opt_tour_path,
            json,
        }
    }

    /// Parse the 'score' command arguments.
    fn parse_score_command(args: &[String]) -> Command {
        if args.len() < 4 {
            eprintln!("Error: 'score' command requires an instance path and a tour path");
            return Command::Help;
        }

        Command::Score {
            instance_path: PathBuf::from(&args[2]),
            tour_path: PathBuf::from(&args[3]),
        }
    }

    /// The value following the option at `i`, if any.
    fn take_value(args: &[String], i: usize) -> Option<&String> {
        args.get(i + 1)
    }
}
