//! Search run reporting.
//!
//! Bundles the incumbent tour, its cost, and the cost trace for hand-off to
//! an external renderer or printer. The engine itself has no file or
//! display output; this module only shapes the data and formats a text
//! summary.

use serde::{Deserialize, Serialize};

use crate::error::SearchResult;
use crate::search::trace::CostTrace;
use crate::tour::Tour;

/// Final result of a search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Best tour found.
    pub tour: Tour,
    /// Cost of the best tour.
    pub cost: f64,
    /// Per-iteration incumbent costs.
    pub trace: CostTrace,
    /// Cost of an externally supplied reference tour, if one was scored.
    pub reference_cost: Option<f64>,
}

impl SearchReport {
    /// Create a report for a finished run.
    #[must_use]
    pub const fn new(tour: Tour, cost: f64, trace: CostTrace) -> Self {
        Self {
            tour,
            cost,
            trace,
            reference_cost: None,
        }
    }

    /// Attach a reference cost for gap reporting.
    #[must_use]
    pub const fn with_reference(mut self, reference_cost: f64) -> Self {
        self.reference_cost = Some(reference_cost);
        self
    }

    /// Number of iterations the run completed.
    #[must_use]
    pub fn iterations(&self) -> u64 {
        self.trace.last().map_or(0, |p| p.iteration + 1)
    }

    /// Relative gap to the reference cost, in percent.
    ///
    /// `None` when no reference was attached or the reference cost is zero.
    #[must_use]
    pub fn gap_percent(&self) -> Option<f64> {
        self.reference_cost.and_then(|reference| {
            if reference == 0.0 {
                None
            } else {
                Some((self.cost - reference) / reference * 100.0)
            }
        })
    }

    /// Serialize the report as JSON for an external sink.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> SearchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for SearchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tour: {}", self.tour)?;
        writeln!(f, "Total distance: {:.4}", self.cost)?;
        writeln!(f, "Iterations: {}", self.iterations())?;
        if let Some(reference) = self.reference_cost {
            writeln!(f, "Reference distance: {reference:.4}")?;
            if let Some(gap) = self.gap_percent() {
                writeln!(f, "Gap to reference: {gap:.2}%")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_report() -> SearchReport {
        let mut trace = CostTrace::new();
        trace.record(0, 6.0);
        trace.record(1, 5.0);
        trace.record(2, 4.2);
        SearchReport::new(Tour::new(vec![0, 1, 2, 3]).unwrap(), 4.2, trace)
    }

    #[test]
    fn test_iterations_from_trace() {
        let report = sample_report();
        assert_eq!(report.iterations(), 3);
    }

    #[test]
    fn test_iterations_empty_trace() {
        let report = SearchReport::new(Tour::identity(4), 4.0, CostTrace::new());
        assert_eq!(report.iterations(), 0);
    }

    #[test]
    fn test_gap_percent() {
        let report = sample_report().with_reference(4.0);
        let gap = report.gap_percent().unwrap();
        assert!((gap - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_gap_without_reference() {
        let report = sample_report();
        assert!(report.gap_percent().is_none());
    }

    #[test]
    fn test_gap_zero_reference() {
        let report = sample_report().with_reference(0.0);
        assert!(report.gap_percent().is_none());
    }

    #[test]
    fn test_display_includes_summary() {
        let report = sample_report().with_reference(4.0);
        let text = report.to_string();
        assert!(text.contains("Total distance: 4.2"));
        assert!(text.contains("Iterations: 3"));
        assert!(text.contains("Reference distance: 4.0"));
        assert!(text.contains("Gap to reference: 5.00%"));
    }

    #[test]
    fn test_display_without_reference() {
        let text = sample_report().to_string();
        assert!(!text.contains("Reference"));
        assert!(!text.contains("Gap"));
    }

    #[test]
    fn test_json_roundtrip() {
        let report = sample_report().with_reference(4.0);
        let json = report.to_json().unwrap();
        assert!(json.contains("\"cost\""));

        let restored: SearchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, restored);
    }
}
