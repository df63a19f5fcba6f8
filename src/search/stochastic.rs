//! Stochastic 2-opt search.
//!
//! Samples one random 2-opt move per iteration against the working tour.
//! Improving moves are always accepted; non-improving moves are accepted
//! with a small constant probability, which lets the walk escape local
//! optima without a cooling schedule. The incumbent only ever improves.
//!
//! Termination is the wall-clock deadline alone: no convergence criterion
//! and no stagnation cutoff.

use super::{validate_initial_tour, validate_instance, SearchState};
use crate::engine::deadline::Deadline;
use crate::engine::rng::SearchRng;
use crate::error::{SearchError, SearchResult};
use crate::matrix::DistanceMatrix;
use crate::search::trace::CostTrace;
use crate::search::two_opt::apply_two_opt;
use crate::tour::Tour;

/// Random-sampling 2-opt driver.
#[derive(Debug, Clone)]
pub struct StochasticSearch {
    /// Wall-clock budget in seconds.
    time_limit_secs: f64,
    /// Probability of accepting a non-improving candidate.
    acceptance_probability: f64,
}

impl StochasticSearch {
    /// Default probability of accepting a non-improving candidate.
    pub const DEFAULT_ACCEPTANCE: f64 = 1e-5;

    /// Create a driver with the given wall-clock budget and acceptance
    /// probability.
    ///
    /// The budget itself is validated when a run starts, so an invalid
    /// budget surfaces as [`SearchError::InvalidTimeLimit`] from
    /// [`Self::run`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `acceptance_probability` is not
    /// in `[0, 1]`.
    pub fn new(time_limit_secs: f64, acceptance_probability: f64) -> SearchResult<Self> {
        if !(0.0..=1.0).contains(&acceptance_probability) {
            return Err(SearchError::config(format!(
                "acceptance probability must lie in [0, 1], got {acceptance_probability}"
            )));
        }
        Ok(Self {
            time_limit_secs,
            acceptance_probability,
        })
    }

    /// Create a driver with the default acceptance probability.
    ///
    /// # Errors
    ///
    /// Never fails for the default probability; kept fallible for symmetry
    /// with [`Self::new`].
    pub fn with_default_acceptance(time_limit_secs: f64) -> SearchResult<Self> {
        Self::new(time_limit_secs, Self::DEFAULT_ACCEPTANCE)
    }

    /// Wall-clock budget in seconds.
    #[must_use]
    pub const fn time_limit_secs(&self) -> f64 {
        self.time_limit_secs
    }

    /// Probability of accepting a non-improving candidate.
    #[must_use]
    pub const fn acceptance_probability(&self) -> f64 {
        self.acceptance_probability
    }

    /// Sample a cut pair: `i` uniform over `[1, n-2]`, `k` uniform over
    /// `[i+1, n-1]`.
    ///
    /// Position 0 is never sampled, so the first point of the working tour
    /// stays fixed as the cycle origin. Inherited from the reference
    /// sampling scheme and kept as-is; widening it would change every
    /// trajectory for a given seed.
    fn sample_cut(rng: &mut SearchRng, n: usize) -> (usize, usize) {
        let i = rng.gen_range_usize(1, n - 1);
        let k = rng.gen_range_usize(i + 1, n);
        (i, k)
    }

    /// Run the search until the deadline, returning the incumbent tour and
    /// the per-iteration cost trace.
    ///
    /// When `initial` is `None`, the run starts from a uniformly random
    /// permutation drawn from `rng`.
    ///
    /// Candidate cost is recomputed over the whole tour (O(n) per
    /// iteration); the trace this produces is the reference trajectory for
    /// a given seed and move sequence.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidInstance`] if the instance has fewer than 4
    ///   points.
    /// - [`SearchError::InvalidTimeLimit`] if the budget is not positive
    ///   and finite.
    /// - [`SearchError::InvalidTour`] if `initial` does not cover the
    ///   instance.
    pub fn run(
        &self,
        matrix: &DistanceMatrix,
        initial: Option<Tour>,
        rng: &mut SearchRng,
    ) -> SearchResult<(Tour, CostTrace)> {
        validate_instance(matrix)?;
        let deadline = Deadline::after_secs(self.time_limit_secs)?;
        let n = matrix.len();

        let start = match initial {
            Some(tour) => {
                validate_initial_tour(&tour, n)?;
                tour
            }
            None => Tour::random(n, rng),
        };
        let start_cost = matrix.tour_cost(&start);

        let mut state = SearchState::start(start, start_cost);
        let mut trace = CostTrace::new();

        while !deadline.expired() {
            let (i, k) = Self::sample_cut(rng, n);
            let candidate = apply_two_opt(&state.current, i, k);
            let candidate_cost = matrix.tour_cost(&candidate);

            if candidate_cost < state.current_cost {
                state.accept(candidate, candidate_cost);
            } else if rng.gen_f64() < self.acceptance_probability {
                // Random-walk perturbation: the working tour moves uphill,
                // the incumbent does not.
                state.accept(candidate, candidate_cost);
            } else {
                state.stagnate();
            }

            trace.record(state.iterations, state.best_cost);
            state.iterations += 1;
        }

        Ok((state.best, trace))
    }
}

/// Run a stochastic 2-opt search from a random initial tour.
///
/// Convenience wrapper over [`StochasticSearch`].
///
/// # Errors
///
/// See [`StochasticSearch::run`].
pub fn stochastic_search(
    matrix: &DistanceMatrix,
    time_limit_secs: f64,
    acceptance_probability: f64,
    rng: &mut SearchRng,
) -> SearchResult<(Tour, CostTrace)> {
    StochasticSearch::new(time_limit_secs, acceptance_probability)?.run(matrix, None, rng)
}
