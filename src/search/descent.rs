//! Exhaustive first-improvement descent.
//!
//! Scans the full 2-opt neighborhood in lexicographic cut order and accepts
//! the first strictly improving move, then restarts the scan from the new
//! tour. Stops at a local optimum (a full round with no improving pair) or
//! at the deadline, whichever comes first.
//!
//! Given the same initial tour and matrix, the accepted move sequence is
//! fully deterministic.

use super::{validate_initial_tour, validate_instance};
use crate::engine::deadline::Deadline;
use crate::error::SearchResult;
use crate::matrix::DistanceMatrix;
use crate::search::two_opt::apply_two_opt;
use crate::tour::Tour;

/// First-improvement 2-opt hill-climber.
#[derive(Debug, Clone)]
pub struct ExhaustiveDescent {
    /// Wall-clock budget in seconds.
    time_limit_secs: f64,
}

impl ExhaustiveDescent {
    /// Create a driver with the given wall-clock budget.
    ///
    /// The budget is validated when a run starts.
    #[must_use]
    pub const fn new(time_limit_secs: f64) -> Self {
        Self { time_limit_secs }
    }

    /// Wall-clock budget in seconds.
    #[must_use]
    pub const fn time_limit_secs(&self) -> f64 {
        self.time_limit_secs
    }

    /// Descend from `initial` to a 2-opt local optimum or the deadline.
    ///
    /// Returns the final tour and its cost. Cost never increases across
    /// rounds, so the result is never worse than the initial tour.
    ///
    /// The deadline is polled before every candidate evaluation, so a scan
    /// aborts mid-round once the budget is spent; the evaluation in
    /// progress still completes.
    ///
    /// # Errors
    ///
    /// - [`crate::SearchError::InvalidInstance`] if the instance has fewer
    ///   than 4 points.
    /// - [`crate::SearchError::InvalidTimeLimit`] if the budget is not
    ///   positive and finite.
    /// - [`crate::SearchError::InvalidTour`] if `initial` does not cover
    ///   the instance.
    pub fn run(&self, initial: Tour, matrix: &DistanceMatrix) -> SearchResult<(Tour, f64)> {
        validate_instance(matrix)?;
        let deadline = Deadline::after_secs(self.time_limit_secs)?;
        let n = matrix.len();
        validate_initial_tour(&initial, n)?;

        let mut current = initial;
        let mut current_cost = matrix.tour_cost(&current);

        'rounds: loop {
            let mut improved = false;

            'scan: for i in 1..n - 2 {
                for k in (i + 1)..n {
                    if deadline.expired() {
                        break 'rounds;
                    }

                    let candidate = apply_two_opt(&current, i, k);
                    let candidate_cost = matrix.tour_cost(&candidate);
                    if candidate_cost < current_cost {
                        current = candidate;
                        current_cost = candidate_cost;
                        improved = true;
                        break 'scan;
                    }
                }
            }

            if !improved {
                // Local optimum under the 2-opt neighborhood.
                break;
            }
        }

        Ok((current, current_cost))
    }
}

/// Descend from `initial` and return the final tour.
///
/// Convenience wrapper over [`ExhaustiveDescent`].
///
/// # Errors
///
/// See [`ExhaustiveDescent::run`].
pub fn exhaustive_descent(
    initial: Tour,
    matrix: &DistanceMatrix,
    time_limit_secs: f64,
) -> SearchResult<Tour> {
    let (tour, _) = ExhaustiveDescent::new(time_limit_secs).run(initial, matrix)?;
    Ok(tour)
}
