//! End-to-end behavior of the public solver API.

use u_tsp::constructive::nearest_neighbor;
use u_tsp::models::{PinnedEndpoints, Termination};
use u_tsp::permutation::{reverse_in_place, reversed_copy};
use u_tsp::{FirstSolutionStrategy, Solver, SolverConfig, TspError};

const STRATEGIES: [FirstSolutionStrategy; 3] = [
    FirstSolutionStrategy::Random,
    FirstSolutionStrategy::NearestNeighbor,
    FirstSolutionStrategy::ConnectCheapestArcs,
];

fn is_permutation(order: &[usize], n: usize) -> bool {
    let mut seen = vec![false; n];
    order.len() == n
        && order
            .iter()
            .all(|&i| i < n && !std::mem::replace(&mut seen[i], true))
}

/// Points on a line; cost is the distance between them.
fn line(points: &[f64]) -> impl Fn(usize, usize) -> f64 + '_ {
    move |a, b| (points[a] - points[b]).abs()
}

#[test]
fn test_uniform_costs_any_strategy() {
    let cost = |a: usize, b: usize| if a == b { 0.0 } else { 2.0 };
    for strategy in STRATEGIES {
        let config = SolverConfig::default()
            .with_strategy(strategy)
            .with_construction_seed(3);
        let solution = Solver::new(cost, 4).with_config(config).find_solution().unwrap();
        assert!(is_permutation(solution.order(), 4));
        assert!((solution.cost() - 6.0).abs() < 1e-10, "{strategy:?}");
    }
}

#[test]
fn test_reverse_positions_two_to_five() {
    let tour: Vec<usize> = (0..7).collect();
    assert_eq!(reversed_copy(&tour, 2, 5).unwrap(), vec![0, 1, 5, 4, 3, 2, 6]);

    let mut in_place = tour.clone();
    reverse_in_place(&mut in_place, 2, 5).unwrap();
    assert_eq!(in_place, vec![0, 1, 5, 4, 3, 2, 6]);
}

#[test]
fn test_nearest_neighbor_first_choice_from_zero() {
    let cost = |a: usize, b: usize| match (a.min(b), a.max(b)) {
        (0, 1) => 1.0,
        (0, 2) => 5.0,
        (1, 2) => 1.0,
        _ => 1000.0,
    };
    let tour = nearest_neighbor(3, PinnedEndpoints::none(), &cost).unwrap();
    // Node 1 is the cheapest step out of node 0; from 1, nodes 0 and 2 tie.
    assert_eq!(tour[0], 1);
    assert_eq!(tour, vec![1, 0, 2]);
}

#[test]
fn test_line_from_leftmost_point() {
    let points = [5.0, 1.0, 8.0, 3.0, 0.0, 6.0, 2.0];
    for strategy in STRATEGIES {
        let mut solver = Solver::new(line(&points), points.len()).with_config(
            SolverConfig::default()
                .with_strategy(strategy)
                .with_construction_seed(11),
        );
        solver.set_start_node(4).unwrap();
        let solution = solver.find_solution().unwrap();
        assert!(is_permutation(solution.order(), points.len()));
        assert_eq!(solution.order()[0], 4);
        assert!(solution.cost() >= 8.0 - 1e-10);
        assert!(solution.cost() <= solution.initial_cost() + 1e-10);
    }

    // Greedy steps from the leftmost point walk the line in order.
    let mut solver = Solver::new(line(&points), points.len());
    solver.set_start_node(4).unwrap();
    let solution = solver.find_solution().unwrap();
    assert_eq!(solution.order(), &[4, 1, 6, 3, 0, 5, 2]);
    assert!((solution.cost() - 8.0).abs() < 1e-10);
}

#[test]
fn test_labels_pin_and_map() {
    let points = [0.0, 4.0, 1.0, 9.0];
    let mut solver = Solver::with_labels(line(&points), ["depot", "b", "c", "d"]);
    solver.set_start_label("d").unwrap();
    solver.set_end_label("depot").unwrap();

    let solution = solver.find_solution().unwrap();
    assert_eq!(solution.order(), &[3, 1, 2, 0]);
    assert_eq!(
        solution.labels().unwrap(),
        &["d".to_string(), "b".into(), "c".into(), "depot".into()]
    );
}

#[test]
fn test_full_validation_asymmetric() {
    // Forward steps are cheap, backward steps expensive.
    let cost = |a: usize, b: usize| if b > a { 1.0 } else { 10.0 };
    let mut solver = Solver::new(cost, 5);
    // Fixed overhead on top of the arcs; reported costs include it.
    solver.use_full_solution_cost_validation(move |tour: &[usize]| {
        100.0 + tour.windows(2).map(|w| cost(w[0], w[1])).sum::<f64>()
    });
    solver.set_start_node(0).unwrap();
    solver.set_end_node(4).unwrap();

    let solution = solver.find_solution().unwrap();
    assert_eq!(solution.order(), &[0, 1, 2, 3, 4]);
    assert!((solution.cost() - 104.0).abs() < 1e-10);
    assert!((solver.solution_cost(&[0, 3, 2, 1, 4]) - 122.0).abs() < 1e-10);
}

#[test]
fn test_same_start_and_end_rejected() {
    let mut solver = Solver::new(|_: usize, _: usize| 1.0, 3);
    solver.set_start_node(1).unwrap();
    solver.set_end_node(1).unwrap();
    assert_eq!(
        solver.find_solution().unwrap_err(),
        TspError::ConflictingEndpoints(1)
    );
}

#[test]
fn test_tiny_instances() {
    let cost = |a: usize, b: usize| (a + b) as f64;

    let empty = Solver::new(cost, 0).find_solution().unwrap();
    assert!(empty.is_empty());
    assert!((empty.cost() - 0.0).abs() < 1e-10);

    let single = Solver::new(cost, 1).find_solution().unwrap();
    assert_eq!(single.order(), &[0]);

    let mut pair = Solver::new(cost, 2);
    pair.set_start_node(1).unwrap();
    assert_eq!(pair.find_solution().unwrap().order(), &[1, 0]);
}

#[test]
fn test_iteration_limit_reported() {
    let points = [0.0, 9.0, 1.0, 8.0, 2.0, 7.0, 3.0, 6.0];
    let solver = Solver::new(line(&points), points.len()).with_config(
        SolverConfig::default()
            .with_strategy(FirstSolutionStrategy::Random)
            .with_construction_seed(5)
            .with_max_iterations(0),
    );
    let solution = solver.find_solution().unwrap();
    assert_eq!(solution.stats().termination, Termination::IterationLimit);
    assert_eq!(solution.stats().sweeps, 0);
    assert!((solution.cost() - solution.initial_cost()).abs() < 1e-10);
}

#[test]
fn test_mutation_disabled_converges() {
    let points = [0.0, 9.0, 1.0, 8.0, 2.0];
    let solver = Solver::new(line(&points), points.len())
        .with_config(SolverConfig::default().with_mutation(false));
    let solution = solver.find_solution().unwrap();
    assert_eq!(solution.stats().termination, Termination::Converged);
    assert_eq!(solution.stats().mutations, 0);
}
