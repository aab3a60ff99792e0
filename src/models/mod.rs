//! Domain model types for open-path TSP solving.
//!
//! Provides the solver configuration, pinned endpoints, and
//! the solution returned to callers. A tour itself is a plain `Vec<usize>`
//! permutation of `[0, N)`.

mod config;
mod endpoints;
mod solution;

pub use config::{FirstSolutionStrategy, SolverConfig};
pub use endpoints::PinnedEndpoints;
pub use solution::{SearchStats, Solution, Termination};
