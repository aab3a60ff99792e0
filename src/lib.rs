//! # u-tsp
//!
//! Low-cost visiting orders (open Hamiltonian paths) over `N` locations,
//! given only an arc-cost callback that may be asymmetric and non-metric.
//! The first and last stops can be pinned.
//!
//! ## Modules
//!
//! - [`models`] — Configuration, pinned endpoints, solution and statistics
//! - [`evaluation`] — Cost callbacks and tour evaluation
//! - [`permutation`] — Segment reversal primitives
//! - [`constructive`] — Initial tours (random, nearest neighbor, cheapest arc)
//! - [`local_search`] — 2-opt improvement with random-move escape
//! - [`solver`] — The [`Solver`] tying construction and improvement together
//!
//! ## Example
//!
//! ```
//! use u_tsp::Solver;
//!
//! let matrix = [
//!     [0.0, 3.0, 1.0, 7.0],
//!     [3.0, 0.0, 2.0, 4.0],
//!     [1.0, 2.0, 0.0, 6.0],
//!     [7.0, 4.0, 6.0, 0.0],
//! ];
//! let mut solver = Solver::new(|a: usize, b: usize| matrix[a][b], 4);
//! solver.set_end_node(3).unwrap();
//!
//! let solution = solver.find_solution().unwrap();
//! assert_eq!(solution.order(), &[0, 2, 1, 3]);
//! assert_eq!(solution.cost(), 7.0);
//! ```

pub mod constructive;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod permutation;
pub mod solver;

pub use error::{Result, TspError};
pub use models::{FirstSolutionStrategy, Solution, SolverConfig};
pub use solver::Solver;
