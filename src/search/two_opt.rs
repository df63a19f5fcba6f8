//! 2-opt move primitive.
//!
//! A 2-opt move removes two edges from a closed tour and reconnects the two
//! paths by reversing the segment between the cut positions. Reversal
//! preserves the element multiset, so the result is always a permutation of
//! the same points.

use crate::tour::Tour;

/// Apply a 2-opt move: reverse the segment `tour[i..=k]`.
///
/// The result equals `tour[0..i)` followed by `reverse(tour[i..=k])`
/// followed by `tour[k+1..n)`. The input tour is not mutated. Applying the
/// same move twice restores the original tour.
///
/// # Panics
///
/// Panics unless `i < k < tour.len()`.
#[must_use]
pub fn apply_two_opt(tour: &Tour, i: usize, k: usize) -> Tour {
    assert!(i < k, "cut positions must satisfy i < k, got i={i}, k={k}");
    assert!(
        k < tour.len(),
        "cut position k={k} out of range for {} points",
        tour.len()
    );

    let mut order = tour.as_slice().to_vec();
    order[i..=k].reverse();
    Tour::from_order_unchecked(order)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::engine::rng::SearchRng;
    use proptest::prelude::*;

    /// Strategy: a random tour of 4..40 points plus a valid cut pair.
    fn tour_and_cuts() -> impl Strategy<Value = (Tour, usize, usize)> {
        (0u64..u64::MAX, 4usize..40).prop_flat_map(|(seed, n)| {
            (Just(seed), Just(n), 0..(n - 1)).prop_flat_map(|(seed, n, i)| {
                ((i + 1)..n).prop_map(move |k| {
                    let mut rng = SearchRng::new(seed);
                    (Tour::random(n, &mut rng), i, k)
                })
            })
        })
    }

    proptest! {
        /// Falsification test: a 2-opt move preserves the element multiset.
        #[test]
        fn prop_move_is_permutation((tour, i, k) in tour_and_cuts()) {
            let moved = apply_two_opt(&tour, i, k);

            let mut expected = tour.as_slice().to_vec();
            expected.sort_unstable();
            let mut actual = moved.as_slice().to_vec();
            actual.sort_unstable();
            prop_assert_eq!(expected, actual);
        }

        /// Falsification test: a 2-opt move is its own inverse.
        #[test]
        fn prop_move_involution((tour, i, k) in tour_and_cuts()) {
            let restored = apply_two_opt(&apply_two_opt(&tour, i, k), i, k);
            prop_assert_eq!(restored, tour);
        }

        /// Falsification test: the prefix before `i` and suffix after `k`
        /// are untouched.
        #[test]
        fn prop_move_touches_only_segment((tour, i, k) in tour_and_cuts()) {
            let moved = apply_two_opt(&tour, i, k);
            prop_assert_eq!(&tour.as_slice()[..i], &moved.as_slice()[..i]);
            prop_assert_eq!(&tour.as_slice()[k + 1..], &moved.as_slice()[k + 1..]);
        }
    }
}
