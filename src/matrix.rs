//! Distance oracle.
//!
//! An `n x n` symmetric matrix of pairwise distances, built once from 2-D
//! coordinates (Euclidean) or from raw rows, and read-only afterwards. The
//! engine never writes to it, so independent runs may share one matrix by
//! reference.

use serde::{Deserialize, Serialize};

use crate::error::{SearchError, SearchResult};
use crate::tour::Tour;

/// A 2-D point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point at coordinates (x, y).
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Symmetric pairwise distance matrix.
///
/// Invariants, checked at construction: square, zero diagonal, entries
/// finite and non-negative, `d[i][j] == d[j][i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Build a Euclidean distance matrix from 2-D coordinates.
    ///
    /// Each pair is computed once and mirrored, so the result is symmetric
    /// by construction.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidInstance`] if any coordinate is not
    /// finite.
    pub fn from_coords(points: &[Point]) -> SearchResult<Self> {
        for (i, point) in points.iter().enumerate() {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(SearchError::invalid_instance(format!(
                    "point {i} has non-finite coordinates"
                )));
            }
        }

        let n = points.len();
        let mut rows = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                rows[i][j] = d;
                rows[j][i] = d;
            }
        }
        Ok(Self { rows })
    }

    /// Build a matrix from raw rows, validating every invariant.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidInstance`] if the matrix is not square,
    /// has a non-zero diagonal, contains a negative or non-finite entry, or
    /// is not symmetric.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> SearchResult<Self> {
        let n = rows.len();

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(SearchError::invalid_instance(format!(
                    "row {i} has {} columns, expected {n}",
                    row.len()
                )));
            }
            for (j, &d) in row.iter().enumerate() {
                if !d.is_finite() {
                    return Err(SearchError::invalid_instance(format!(
                        "distance ({i}, {j}) is not finite"
                    )));
                }
                if d < 0.0 {
                    return Err(SearchError::invalid_instance(format!(
                        "distance ({i}, {j}) is negative: {d}"
                    )));
                }
            }
            if rows[i][i] != 0.0 {
                return Err(SearchError::invalid_instance(format!(
                    "diagonal entry ({i}, {i}) is {}, expected 0",
                    rows[i][i]
                )));
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if rows[i][j] != rows[j][i] {
                    return Err(SearchError::invalid_instance(format!(
                        "asymmetric distances: d({i},{j})={} but d({j},{i})={}",
                        rows[i][j], rows[j][i]
                    )));
                }
            }
        }

        Ok(Self { rows })
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix covers zero points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distance between two points.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    #[must_use]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    /// Total cost of a closed tour: the sum of its `n` cyclic edges,
    /// including the implicit edge from the last point back to the first.
    ///
    /// # Panics
    ///
    /// Panics if the tour references a point outside this matrix.
    #[must_use]
    pub fn tour_cost(&self, tour: &Tour) -> f64 {
        let order = tour.as_slice();
        if order.len() < 2 {
            return 0.0;
        }

        let mut cost = 0.0;
        for i in 0..order.len() {
            let j = (i + 1) % order.len();
            cost += self.rows[order[i]][order[j]];
        }
        cost
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Unit square: (0,0), (0,1), (1,1), (1,0). Perimeter 4, diagonals √2.
    fn unit_square() -> DistanceMatrix {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        DistanceMatrix::from_coords(&points).unwrap()
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_coords_symmetric() {
        let matrix = unit_square();
        assert_eq!(matrix.len(), 4);
        for i in 0..4 {
            assert_eq!(matrix.distance(i, i), 0.0);
            for j in 0..4 {
                assert_eq!(matrix.distance(i, j), matrix.distance(j, i));
            }
        }
    }

    #[test]
    fn test_from_coords_values() {
        let matrix = unit_square();
        assert!((matrix.distance(0, 1) - 1.0).abs() < 1e-12);
        assert!((matrix.distance(0, 2) - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_from_coords_rejects_nan() {
        let points = [Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)];
        let result = DistanceMatrix::from_coords(&points);
        assert!(matches!(result, Err(SearchError::InvalidInstance { .. })));
    }

    #[test]
    fn test_from_rows_valid() {
        let rows = vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 1.5],
            vec![2.0, 1.5, 0.0],
        ];
        let matrix = DistanceMatrix::from_rows(rows).unwrap();
        assert_eq!(matrix.len(), 3);
        assert!((matrix.distance(0, 2) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let rows = vec![vec![0.0, 1.0], vec![1.0, 0.0, 2.0]];
        let result = DistanceMatrix::from_rows(rows);
        assert!(matches!(result, Err(SearchError::InvalidInstance { .. })));
    }

    #[test]
    fn test_from_rows_rejects_nonzero_diagonal() {
        let rows = vec![vec![0.0, 1.0], vec![1.0, 0.5]];
        let result = DistanceMatrix::from_rows(rows);
        assert!(matches!(result, Err(SearchError::InvalidInstance { .. })));
    }

    #[test]
    fn test_from_rows_rejects_negative() {
        let rows = vec![vec![0.0, -1.0], vec![-1.0, 0.0]];
        let result = DistanceMatrix::from_rows(rows);
        assert!(matches!(result, Err(SearchError::InvalidInstance { .. })));
    }

    #[test]
    fn test_from_rows_rejects_asymmetric() {
        let rows = vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 1.5],
            vec![2.0, 9.9, 0.0],
        ];
        let result = DistanceMatrix::from_rows(rows);
        assert!(matches!(result, Err(SearchError::InvalidInstance { .. })));
    }

    #[test]
    fn test_from_rows_rejects_non_finite() {
        let rows = vec![vec![0.0, f64::INFINITY], vec![f64::INFINITY, 0.0]];
        let result = DistanceMatrix::from_rows(rows);
        assert!(matches!(result, Err(SearchError::InvalidInstance { .. })));
    }

    #[test]
    fn test_tour_cost_square_perimeter() {
        let matrix = unit_square();
        let tour = Tour::new(vec![0, 1, 2, 3]).unwrap();
        assert!((matrix.tour_cost(&tour) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_tour_cost_crossing_diagonals() {
        let matrix = unit_square();
        // Both diagonals plus two unit sides
        let tour = Tour::new(vec![0, 2, 1, 3]).unwrap();
        let expected = 2.0 + 2.0 * std::f64::consts::SQRT_2;
        assert!((matrix.tour_cost(&tour) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_tour_cost_rotation_invariant() {
        let matrix = unit_square();
        let tour = Tour::new(vec![0, 1, 2, 3]).unwrap();
        let base = matrix.tour_cost(&tour);

        for shift in 0..4 {
            let rotated = tour.rotated(shift);
            assert!((matrix.tour_cost(&rotated) - base).abs() < 1e-12);
        }
    }

    #[test]
    fn test_tour_cost_reversal_invariant() {
        let matrix = unit_square();
        let tour = Tour::new(vec![0, 2, 1, 3]).unwrap();
        let base = matrix.tour_cost(&tour);
        assert!((matrix.tour_cost(&tour.reversed()) - base).abs() < 1e-12);
    }

    #[test]
    fn test_tour_cost_degenerate() {
        let matrix = unit_square();
        assert_eq!(matrix.tour_cost(&Tour::new(vec![]).unwrap()), 0.0);
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = DistanceMatrix::from_rows(vec![]).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.len(), 0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let matrix = unit_square();
        let json = serde_json::to_string(&matrix).unwrap();
        let restored: DistanceMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(matrix, restored);
    }
}
