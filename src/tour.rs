//! Tour representation.
//!
//! A tour is a permutation of point indices `[0, n)` visiting every point
//! exactly once. The edge from the last point back to the first is implicit
//! and always included in cost computation, so two tours related by rotation
//! or reversal describe the same undirected cycle.

use serde::{Deserialize, Serialize};

use crate::engine::rng::SearchRng;
use crate::error::{SearchError, SearchResult};

/// A closed tour over `n` points, stored as a permutation of `[0, n)`.
///
/// The permutation invariant is established by the constructors; internal
/// operations (segment reversal, rotation) preserve it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour(Vec<usize>);

impl Tour {
    /// Create a tour from a visiting order, validating the permutation
    /// invariant.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidTour`] if any index is out of range or
    /// appears more than once.
    pub fn new(order: Vec<usize>) -> SearchResult<Self> {
        let n = order.len();
        let mut visited = vec![false; n];
        for &point in &order {
            if point >= n {
                return Err(SearchError::invalid_tour(format!(
                    "index {point} out of range for {n} points"
                )));
            }
            if visited[point] {
                return Err(SearchError::invalid_tour(format!(
                    "index {point} appears more than once"
                )));
            }
            visited[point] = true;
        }
        Ok(Self(order))
    }

    /// Create a uniformly random tour over `n` points.
    #[must_use]
    pub fn random(n: usize, rng: &mut SearchRng) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        rng.shuffle(&mut order);
        Self(order)
    }

    /// Create the identity tour `[0, 1, ..., n-1]`.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Convert an externally supplied 1-indexed visiting order (as found in
    /// TSPLIB `.opt.tour` files) into a standard 0-indexed tour.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidTour`] if any entry is zero, out of
    /// range, or duplicated.
    pub fn from_one_indexed(order: &[usize]) -> SearchResult<Self> {
        let mut shifted = Vec::with_capacity(order.len());
        for &point in order {
            if point == 0 {
                return Err(SearchError::invalid_tour(
                    "1-indexed tour contains index 0",
                ));
            }
            shifted.push(point - 1);
        }
        Self::new(shifted)
    }

    /// Wrap an order known to be a permutation.
    ///
    /// Callers must guarantee the permutation invariant.
    pub(crate) fn from_order_unchecked(order: Vec<usize>) -> Self {
        debug_assert!(Self::new(order.clone()).is_ok());
        Self(order)
    }

    /// Number of points in the tour.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the tour covers zero points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Visiting order as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Consume the tour and return the visiting order.
    #[must_use]
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// The same cycle starting `shift` positions later.
    #[must_use]
    pub fn rotated(&self, shift: usize) -> Self {
        let n = self.0.len();
        if n == 0 {
            return self.clone();
        }
        let shift = shift % n;
        let mut order = Vec::with_capacity(n);
        order.extend_from_slice(&self.0[shift..]);
        order.extend_from_slice(&self.0[..shift]);
        Self(order)
    }

    /// The same cycle traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut order = self.0.clone();
        order.reverse();
        Self(order)
    }

    /// Whether two tours describe the same undirected cycle, i.e. are equal
    /// up to rotation and reversal.
    #[must_use]
    pub fn same_cycle(&self, other: &Self) -> bool {
        let n = self.0.len();
        if n != other.0.len() {
            return false;
        }
        if n == 0 {
            return true;
        }
        for shift in 0..n {
            let forward = (0..n).all(|j| self.0[j] == other.0[(j + shift) % n]);
            let backward = (0..n).all(|j| self.0[j] == other.0[(shift + n - j) % n]);
            if forward || backward {
                return true;
            }
        }
        false
    }
}

impl std::fmt::Display for Tour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, point) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{point}")?;
        }
        write!(f, "]")
    }
}
