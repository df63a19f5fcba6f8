//! End-to-end tests for the instance → matrix → driver → report pipeline.
//!
//! These tests verify:
//! - TSPLIB loading feeds the drivers correctly
//! - Both drivers honor their input contracts and invariants
//! - Reference tours convert from 1-indexed files and score correctly
//! - Invalid inputs are rejected at call entry

#![allow(clippy::unwrap_used)]

use viajar::instance::{parse_opt_tour, parse_tsplib};
use viajar::prelude::*;

const SQUARE_TSP: &str = "\
NAME : square4
TYPE : TSP
COMMENT : unit square, optimal cycle cost 4
DIMENSION : 4
EDGE_WEIGHT_TYPE : EUC_2D
NODE_COORD_SECTION
1 0.0 0.0
2 0.0 1.0
3 1.0 1.0
4 1.0 0.0
EOF
";

const SQUARE_OPT_TOUR: &str = "\
NAME : square4.opt.tour
TYPE : TOUR
DIMENSION : 4
TOUR_SECTION
1
2
3
4
-1
EOF
";

const TRIANGLE_TSP: &str = "\
NAME : triangle3
TYPE : TSP
DIMENSION : 3
EDGE_WEIGHT_TYPE : EUC_2D
NODE_COORD_SECTION
1 0.0 0.0
2 1.0 0.0
3 0.0 1.0
EOF
";

const GRID_TSP: &str = "\
NAME : grid9
TYPE : TSP
COMMENT : 3x3 unit grid
DIMENSION : 9
EDGE_WEIGHT_TYPE : EUC_2D
NODE_COORD_SECTION
1 0.0 0.0
2 1.0 0.0
3 2.0 0.0
4 2.0 1.0
5 2.0 2.0
6 1.0 2.0
7 0.0 2.0
8 0.0 1.0
9 1.0 1.0
EOF
";

const BUDGET: f64 = 0.05;

fn square_matrix() -> DistanceMatrix {
    parse_tsplib(SQUARE_TSP).unwrap().distance_matrix().unwrap()
}

fn grid_matrix() -> DistanceMatrix {
    parse_tsplib(GRID_TSP).unwrap().distance_matrix().unwrap()
}

// =============================================================================
// Pipeline: instance loading into drivers
// =============================================================================

#[test]
fn e2e_square_instance_loads_and_scores() {
    let instance = parse_tsplib(SQUARE_TSP).unwrap();
    assert_eq!(instance.name, "square4");

    let matrix = instance.distance_matrix().unwrap();
    let reference = parse_opt_tour(SQUARE_OPT_TOUR).unwrap();
    assert_eq!(reference.as_slice(), &[0, 1, 2, 3]);
    assert!((matrix.tour_cost(&reference) - 4.0).abs() < 1e-12);
}

#[test]
fn e2e_stochastic_on_square_reaches_perimeter() {
    let matrix = square_matrix();
    let mut rng = SearchRng::new(42);

    let (best, trace) = stochastic_search(&matrix, BUDGET, 1e-5, &mut rng).unwrap();
    assert!((matrix.tour_cost(&best) - 4.0).abs() < 1e-9);
    assert!(trace.is_non_increasing());
    assert!(best.same_cycle(&Tour::identity(4)));
}

#[test]
fn e2e_stochastic_on_grid_improves_over_start() {
    let matrix = grid_matrix();
    let mut rng = SearchRng::new(42);

    let initial = Tour::random(matrix.len(), &mut rng);
    let initial_cost = matrix.tour_cost(&initial);

    let driver = StochasticSearch::with_default_acceptance(BUDGET).unwrap();
    let (best, trace) = driver.run(&matrix, Some(initial), &mut rng).unwrap();

    let best_cost = matrix.tour_cost(&best);
    assert!(best_cost <= initial_cost);
    assert!(trace.is_non_increasing());
    assert!((trace.last().unwrap().best_cost - best_cost).abs() < 1e-9);
}

#[test]
fn e2e_descent_preserves_optimal_square() {
    let matrix = square_matrix();
    let reference = parse_opt_tour(SQUARE_OPT_TOUR).unwrap();

    let (tour, cost) = ExhaustiveDescent::new(1.0)
        .run(reference.clone(), &matrix)
        .unwrap();
    assert_eq!(tour, reference);
    assert!((cost - 4.0).abs() < 1e-12);
}

#[test]
fn e2e_descent_repairs_crossing_square() {
    let matrix = square_matrix();
    let crossing = Tour::new(vec![0, 2, 1, 3]).unwrap();
    let crossing_cost = matrix.tour_cost(&crossing);
    assert!(crossing_cost > 4.8 && crossing_cost < 4.9);

    let tour = exhaustive_descent(crossing, &matrix, 1.0).unwrap();
    assert!((matrix.tour_cost(&tour) - 4.0).abs() < 1e-12);
}

#[test]
fn e2e_descent_on_grid_reaches_local_optimum() {
    let matrix = grid_matrix();
    let mut rng = SearchRng::new(7);
    let initial = Tour::random(matrix.len(), &mut rng);
    let initial_cost = matrix.tour_cost(&initial);

    let (tour, cost) = ExhaustiveDescent::new(10.0).run(initial, &matrix).unwrap();
    assert!(cost <= initial_cost);

    // No scanned cut pair improves the result
    let n = matrix.len();
    for i in 1..n - 2 {
        for k in (i + 1)..n {
            let candidate = apply_two_opt(&tour, i, k);
            assert!(matrix.tour_cost(&candidate) >= cost);
        }
    }
}

// =============================================================================
// Report hand-off
// =============================================================================

#[test]
fn e2e_report_gap_against_reference() {
    let matrix = square_matrix();
    let mut rng = SearchRng::new(42);

    let (best, trace) = stochastic_search(&matrix, BUDGET, 1e-5, &mut rng).unwrap();
    let cost = matrix.tour_cost(&best);

    let reference = parse_opt_tour(SQUARE_OPT_TOUR).unwrap();
    let report =
        SearchReport::new(best, cost, trace).with_reference(matrix.tour_cost(&reference));

    let gap = report.gap_percent().unwrap();
    assert!(gap.abs() < 1e-9, "square run should match the optimum, gap {gap}");

    let json = report.to_json().unwrap();
    assert!(json.contains("\"reference_cost\""));
}

// =============================================================================
// Error scenarios
// =============================================================================

#[test]
fn e2e_three_point_instance_rejected_by_both_drivers() {
    let matrix = parse_tsplib(TRIANGLE_TSP)
        .unwrap()
        .distance_matrix()
        .unwrap();
    let mut rng = SearchRng::new(42);

    let stochastic = stochastic_search(&matrix, 1.0, 1e-5, &mut rng);
    assert!(matches!(
        stochastic,
        Err(SearchError::InvalidInstance { .. })
    ));

    let descent = exhaustive_descent(Tour::identity(3), &matrix, 1.0);
    assert!(matches!(descent, Err(SearchError::InvalidInstance { .. })));
}

#[test]
fn e2e_zero_time_limit_rejected_by_both_drivers() {
    let matrix = square_matrix();
    let mut rng = SearchRng::new(42);

    let stochastic = stochastic_search(&matrix, 0.0, 1e-5, &mut rng);
    assert!(matches!(
        stochastic,
        Err(SearchError::InvalidTimeLimit { .. })
    ));

    let descent = exhaustive_descent(Tour::identity(4), &matrix, 0.0);
    assert!(matches!(descent, Err(SearchError::InvalidTimeLimit { .. })));
}

#[test]
fn e2e_foreign_tour_rejected() {
    let matrix = square_matrix();
    let five_points = Tour::identity(5);

    let result = exhaustive_descent(five_points, &matrix, 1.0);
    assert!(matches!(result, Err(SearchError::InvalidTour { .. })));
}

// =============================================================================
// Config-driven runs
// =============================================================================

#[test]
fn e2e_config_selects_driver() {
    let yaml = "seed: 5\ntime_limit_secs: 0.05\ndriver: descent\n";
    let config = SearchConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.driver, DriverKind::Descent);

    let matrix = grid_matrix();
    let mut rng = SearchRng::new(config.seed);
    let initial = Tour::random(matrix.len(), &mut rng);

    let (tour, _) = ExhaustiveDescent::new(config.time_limit_secs)
        .run(initial, &matrix)
        .unwrap();
    assert_eq!(tour.len(), matrix.len());
}

#[test]
fn e2e_config_drives_stochastic_run() {
    let config = SearchConfig::builder()
        .seed(11)
        .time_limit_secs(BUDGET)
        .acceptance_probability(1e-4)
        .build();

    let matrix = grid_matrix();
    let mut rng = SearchRng::new(config.seed);

    let driver =
        StochasticSearch::new(config.time_limit_secs, config.acceptance_probability).unwrap();
    let (best, trace) = driver.run(&matrix, None, &mut rng).unwrap();

    assert_eq!(best.len(), 9);
    assert!(trace.is_non_increasing());
}
