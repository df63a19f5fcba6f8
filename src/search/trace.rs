//! Cost trace.
//!
//! Maps iteration numbers to the best cost seen at that iteration. The
//! trace exists for external reporting and plotting only; no control
//! decision reads it.

use serde::{Deserialize, Serialize};

/// One sampled point of a search run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TracePoint {
    /// Iteration counter at the time of the sample.
    pub iteration: u64,
    /// Incumbent (best-so-far) cost at that iteration.
    pub best_cost: f64,
}

/// Append-only record of incumbent cost per iteration.
///
/// Best cost is monotonically non-increasing across a run, so the recorded
/// sequence is as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostTrace {
    points: Vec<TracePoint>,
}

impl CostTrace {
    /// Create an empty trace.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append one `(iteration, best_cost)` sample.
    pub fn record(&mut self, iteration: u64, best_cost: f64) {
        self.points.push(TracePoint {
            iteration,
            best_cost,
        });
    }

    /// Number of recorded samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no samples were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All recorded samples, in iteration order.
    #[must_use]
    pub fn points(&self) -> &[TracePoint] {
        &self.points
    }

    /// The most recent sample, if any.
    #[must_use]
    pub fn last(&self) -> Option<&TracePoint> {
        self.points.last()
    }

    /// Whether recorded best costs never increase.
    #[must_use]
    pub fn is_non_increasing(&self) -> bool {
        self.points
            .windows(2)
            .all(|pair| pair[1].best_cost <= pair[0].best_cost)
    }
}
