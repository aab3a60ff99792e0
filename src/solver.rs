//! Solver façade: configuration, endpoint pinning, construction, and local search.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::constructive::construct;
use crate::error::{Endpoint, Result, TspError};
use crate::evaluation::{ArcCost, TourCost, TourEvaluator};
use crate::local_search::TwoOptSearch;
use crate::models::{PinnedEndpoints, Solution, SolverConfig};

/// Finds a low-cost open path through `N` locations.
///
/// Runs one construction heuristic to get a feasible tour, then improves it
/// with 2-opt local search until a termination condition fires.
///
/// # Examples
///
/// ```
/// use u_tsp::{FirstSolutionStrategy, Solver, SolverConfig};
///
/// let points: [f64; 5] = [0.0, 7.0, 2.0, 9.0, 4.0];
/// let cost = |a: usize, b: usize| (points[a] - points[b]).abs();
///
/// let mut solver = Solver::new(cost, points.len()).with_config(
///     SolverConfig::default().with_strategy(FirstSolutionStrategy::ConnectCheapestArcs),
/// );
/// solver.set_start_node(0).unwrap();
///
/// let solution = solver.find_solution().unwrap();
/// assert_eq!(solution.order(), &[0, 2, 4, 1, 3]);
/// assert_eq!(solution.cost(), 9.0);
/// ```
pub struct Solver<'a, C> {
    arc_cost: C,
    node_count: usize,
    labels: Option<Vec<String>>,
    full_cost: Option<Box<dyn TourCost + 'a>>,
    pins: PinnedEndpoints,
    config: SolverConfig,
}

impl<'a, C: ArcCost> Solver<'a, C> {
    /// Creates a solver over `node_count` locations with default configuration.
    pub fn new(arc_cost: C, node_count: usize) -> Self {
        Self {
            arc_cost,
            node_count,
            labels: None,
            full_cost: None,
            pins: PinnedEndpoints::none(),
            config: SolverConfig::default(),
        }
    }

    /// Creates a solver over labelled locations; node `i` is `labels[i]`.
    ///
    /// Labels can be used to pin endpoints and are returned with the solution.
    pub fn with_labels<I, S>(arc_cost: C, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let mut solver = Self::new(arc_cost, labels.len());
        solver.labels = Some(labels);
        solver
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Replaces the configuration used by later solves.
    pub fn set_config(&mut self, config: SolverConfig) {
        self.config = config;
    }

    /// Number of locations.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Location labels, if the solver was built with them.
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// Currently pinned endpoints.
    pub fn pinned(&self) -> PinnedEndpoints {
        self.pins
    }

    /// Pins the first position of the tour to node `index`.
    ///
    /// # Errors
    ///
    /// [`TspError::NodeOutOfRange`] if `index` is outside `[0, N)`.
    pub fn set_start_node(&mut self, index: usize) -> Result<()> {
        self.pins.start = Some(self.check_index(index, Endpoint::Start)?);
        Ok(())
    }

    /// Pins the last position of the tour to node `index`.
    ///
    /// # Errors
    ///
    /// [`TspError::NodeOutOfRange`] if `index` is outside `[0, N)`.
    pub fn set_end_node(&mut self, index: usize) -> Result<()> {
        self.pins.end = Some(self.check_index(index, Endpoint::End)?);
        Ok(())
    }

    /// Pins the first position of the tour to the node labelled `label`.
    ///
    /// # Errors
    ///
    /// [`TspError::UnknownLabel`] if no node carries `label`.
    pub fn set_start_label(&mut self, label: &str) -> Result<()> {
        self.pins.start = Some(self.find_label(label)?);
        Ok(())
    }

    /// Pins the last position of the tour to the node labelled `label`.
    ///
    /// # Errors
    ///
    /// [`TspError::UnknownLabel`] if no node carries `label`.
    pub fn set_end_label(&mut self, label: &str) -> Result<()> {
        self.pins.end = Some(self.find_label(label)?);
        Ok(())
    }

    /// Judges 2-opt moves by recomputing the whole tour cost with
    /// `tour_cost` instead of the incremental boundary-arc delta.
    ///
    /// Required for exact results with asymmetric or non-additive costs.
    /// `tour_cost` also becomes the cost reported in the [`Solution`].
    pub fn use_full_solution_cost_validation<F>(&mut self, tour_cost: F)
    where
        F: TourCost + 'a,
    {
        self.full_cost = Some(Box::new(tour_cost));
    }

    /// Cost of `tour` as the solver sees it: the full-tour callback if
    /// installed, otherwise the sum of arc costs.
    pub fn solution_cost(&self, tour: &[usize]) -> f64 {
        self.evaluator().tour_cost(tour)
    }

    /// Builds an initial tour with the configured strategy and improves it.
    ///
    /// # Errors
    ///
    /// [`TspError::ConflictingEndpoints`] if start and end are pinned to the
    /// same node of a multi-node instance, and
    /// [`TspError::NoFeasibleContinuation`] from nearest-neighbor construction.
    pub fn find_solution(&self) -> Result<Solution> {
        if let (Some(start), Some(end)) = (self.pins.start, self.pins.end) {
            if start == end && self.node_count > 1 {
                return Err(TspError::ConflictingEndpoints(start));
            }
        }

        let evaluator = self.evaluator();
        info!(
            event = "solve_start",
            nodes = self.node_count,
            strategy = ?self.config.first_solution_strategy,
            full_validation = evaluator.uses_full_cost(),
            mutation = self.config.enable_solution_mutation,
        );

        let mut rng = match self.config.construction_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let pins = if self.node_count == 1 {
            PinnedEndpoints::new(self.pins.start, None)
        } else {
            self.pins
        };
        let initial = construct(
            self.config.first_solution_strategy,
            self.node_count,
            pins,
            &self.arc_cost,
            &mut rng,
        )?;
        let initial_cost = evaluator.tour_cost(&initial);
        debug!(event = "construction_end", cost = initial_cost);

        let outcome = TwoOptSearch::new(&evaluator, pins, &self.config).run(initial);
        info!(
            event = "solve_end",
            initial_cost,
            cost = outcome.cost,
            sweeps = outcome.stats.sweeps,
            improvements = outcome.stats.improvements,
            mutations = outcome.stats.mutations,
            termination = ?outcome.stats.termination,
        );

        let labels = self
            .labels
            .as_ref()
            .map(|labels| outcome.tour.iter().map(|&i| labels[i].clone()).collect());
        Ok(Solution::new(
            outcome.tour,
            labels,
            outcome.cost,
            initial_cost,
            outcome.stats,
        ))
    }

    fn evaluator(&self) -> TourEvaluator<'_, C> {
        let evaluator = TourEvaluator::new(&self.arc_cost);
        match self.full_cost.as_deref() {
            Some(full) => evaluator.with_full_cost(full),
            None => evaluator,
        }
    }

    fn check_index(&self, index: usize, endpoint: Endpoint) -> Result<usize> {
        if index < self.node_count {
            Ok(index)
        } else {
            Err(TspError::NodeOutOfRange {
                endpoint,
                index,
                node_count: self.node_count,
            })
        }
    }

    fn find_label(&self, label: &str) -> Result<usize> {
        self.labels
            .as_ref()
            .and_then(|labels| labels.iter().position(|l| l == label))
            .ok_or_else(|| TspError::UnknownLabel(label.to_string()))
    }
}
