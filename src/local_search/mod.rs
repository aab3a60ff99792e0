//! Local search for improving a constructed tour.
//!
//! - [`two_opt`] — 2-opt segment reversal with incremental or full-cost
//!   evaluation and random-move escape from local minima
//! - [`mutation`] — counter-reseeded random move generator

mod mutation;
mod two_opt;

pub use mutation::MutationMoves;
pub use two_opt::{SearchOutcome, TwoOptSearch};
