//! Cost callbacks and tour evaluation.
//!
//! - [`ArcCost`] / [`TourCost`] — opaque cost callbacks, implemented for closures
//! - [`TourEvaluator`] — total tour cost and incremental 2-opt deltas

mod cost;
mod evaluator;

pub use cost::{is_symmetric, path_cost, ArcCost, TourCost};
pub use evaluator::TourEvaluator;
