//! Solver configuration.

use serde::{Deserialize, Serialize};

/// Heuristic used to build the first feasible tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstSolutionStrategy {
    /// Uniform shuffle of the unpinned nodes.
    Random,
    /// Greedy chaining: always move to the cheapest unvisited node.
    #[default]
    NearestNeighbor,
    /// Greedy fragment matching: repeatedly join the two fragments connected
    /// by the globally cheapest arc.
    ConnectCheapestArcs,
}

/// Configuration parameters for [`Solver`](crate::Solver).
///
/// Fixed for the duration of a single solve.
///
/// # Examples
///
/// ```
/// use u_tsp::{FirstSolutionStrategy, SolverConfig};
///
/// let config = SolverConfig::default()
///     .with_strategy(FirstSolutionStrategy::ConnectCheapestArcs)
///     .with_max_iterations(200)
///     .with_mutation(false);
/// assert_eq!(config.max_iterations, 200);
/// assert!(!config.enable_solution_mutation);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Construction heuristic for the initial tour.
    pub first_solution_strategy: FirstSolutionStrategy,
    /// Apply a random 2-opt move when a sweep finds no improvement, to
    /// escape local minima.
    pub enable_solution_mutation: bool,
    /// Maximum number of 2-opt sweeps.
    pub max_iterations: usize,
    /// Maximum number of consecutive mutations without a new best tour.
    /// Reset whenever the best tour improves.
    pub max_solution_mutations: usize,
    /// Seed of the first mutation move; each later mutation reseeds with
    /// the next integer.
    pub mutation_seed: u64,
    /// Seed for [`FirstSolutionStrategy::Random`] (None = OS entropy).
    pub construction_seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            first_solution_strategy: FirstSolutionStrategy::NearestNeighbor,
            enable_solution_mutation: true,
            max_iterations: 5000,
            max_solution_mutations: 50,
            mutation_seed: 1,
            construction_seed: None,
        }
    }
}

impl SolverConfig {
    /// Sets the construction heuristic.
    pub fn with_strategy(mut self, strategy: FirstSolutionStrategy) -> Self {
        self.first_solution_strategy = strategy;
        self
    }

    /// Enables or disables mutation moves.
    pub fn with_mutation(mut self, enabled: bool) -> Self {
        self.enable_solution_mutation = enabled;
        self
    }

    /// Sets the maximum number of sweeps.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the maximum number of consecutive non-improving mutations.
    pub fn with_max_mutations(mut self, n: usize) -> Self {
        self.max_solution_mutations = n;
        self
    }

    /// Sets the starting seed of the mutation generator.
    pub fn with_mutation_seed(mut self, seed: u64) -> Self {
        self.mutation_seed = seed;
        self
    }

    /// Seeds the random construction heuristic.
    pub fn with_construction_seed(mut self, seed: u64) -> Self {
        self.construction_seed = Some(seed);
        self
    }
}
