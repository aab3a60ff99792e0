//! Solver output: the tour plus search statistics.

/// Why the local search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A sweep found no improvement and mutation is disabled (or the tour
    /// has no movable segment).
    Converged,
    /// The consecutive-mutation cap was reached.
    MutationLimit,
    /// The sweep cap was reached.
    IterationLimit,
}

/// Counters collected during one local search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Completed 2-opt sweeps.
    pub sweeps: usize,
    /// Improving moves applied during sweeps.
    pub improvements: usize,
    /// Mutation moves applied in total.
    pub mutations: usize,
    /// Why the search stopped.
    pub termination: Termination,
}

/// A complete tour returned by [`Solver::find_solution`](crate::Solver::find_solution).
///
/// # Examples
///
/// ```
/// use u_tsp::Solver;
///
/// let solver = Solver::with_labels(|a: usize, b: usize| a.abs_diff(b) as f64, ["x", "y", "z"]);
/// let solution = solver.find_solution().unwrap();
/// assert_eq!(solution.len(), 3);
/// assert_eq!(solution.labels().map(|l| l.len()), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    order: Vec<usize>,
    labels: Option<Vec<String>>,
    cost: f64,
    initial_cost: f64,
    stats: SearchStats,
}

impl Solution {
    pub(crate) fn new(
        order: Vec<usize>,
        labels: Option<Vec<String>>,
        cost: f64,
        initial_cost: f64,
        stats: SearchStats,
    ) -> Self {
        Self {
            order,
            labels,
            cost,
            initial_cost,
            stats,
        }
    }

    /// Node indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the solution, returning the visiting order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Labels in visiting order, if the solver was built with labels.
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// Cost of the returned tour.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Cost of the tour produced by the construction heuristic.
    pub fn initial_cost(&self) -> f64 {
        self.initial_cost
    }

    /// Local search statistics.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Number of nodes in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
