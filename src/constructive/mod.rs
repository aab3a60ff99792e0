//! Constructive heuristics for building the initial tour.
//!
//! - [`random_order`] — Uniform shuffle around the pinned endpoints, O(n)
//! - [`nearest_neighbor`] — Greedy chaining along the cheapest arc, O(n²)
//! - [`cheapest_arc`] — Greedy fragment matching on the globally cheapest arc, O(n³)
//!
//! [`construct`] dispatches on [`FirstSolutionStrategy`].

mod cheapest_arc;
mod nearest_neighbor;
mod random_order;

pub use cheapest_arc::cheapest_arc;
pub use nearest_neighbor::nearest_neighbor;
pub use random_order::random_order;

use rand::Rng;

use crate::error::Result;
use crate::evaluation::ArcCost;
use crate::models::{FirstSolutionStrategy, PinnedEndpoints};

/// Builds an initial tour of `n` nodes with the selected strategy.
///
/// `rng` is only consumed by [`FirstSolutionStrategy::Random`].
///
/// # Errors
///
/// Propagates [`TspError::NoFeasibleContinuation`](crate::TspError::NoFeasibleContinuation)
/// from nearest-neighbor construction.
pub fn construct<C, R>(
    strategy: FirstSolutionStrategy,
    n: usize,
    pins: PinnedEndpoints,
    cost: &C,
    rng: &mut R,
) -> Result<Vec<usize>>
where
    C: ArcCost + ?Sized,
    R: Rng + ?Sized,
{
    match strategy {
        FirstSolutionStrategy::Random => Ok(random_order(n, pins, rng)),
        FirstSolutionStrategy::NearestNeighbor => nearest_neighbor(n, pins, cost),
        FirstSolutionStrategy::ConnectCheapestArcs => Ok(cheapest_arc(n, pins, cost)),
    }
}
