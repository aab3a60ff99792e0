//! 2-opt local search over an open path.
//!
//! # Algorithm
//!
//! A sweep visits every pair of free positions `a < b` in increasing order
//! and reverses `working[a..=b]` as soon as that is strictly cheaper
//! (first-improvement), so later pairs see the updated tour.
//!
//! Two ways to judge a move:
//!
//! - **Incremental** (default): only the two boundary arcs are compared,
//!   see [`TourEvaluator::two_opt_delta`]. Exact for symmetric additive costs.
//! - **Full validation** (when the evaluator carries a full-tour cost): the
//!   reversed copy is costed as a whole and replaces `working` only if cheaper.
//!
//! When a sweep finds nothing, the search either stops or, with mutation
//! enabled, applies one random 2-opt move regardless of its cost and sweeps
//! again. The best tour is tracked separately, so mutations never leak into
//! the result. The mutation counter resets whenever the best tour improves.
//!
//! ```text
//! Improving --sweep improved--> Improving
//! Improving --no improvement--> StuckMutating (mutation on) | Terminated
//! StuckMutating --move applied--> Improving
//! StuckMutating --cap reached--> Terminated
//! ```
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use std::ops::Range;

use tracing::{debug, trace};

use super::mutation::MutationMoves;
use crate::evaluation::{ArcCost, TourEvaluator};
use crate::models::{PinnedEndpoints, SearchStats, SolverConfig, Termination};
use crate::permutation::{reverse_segment, reversed_segment_copy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Improving,
    StuckMutating,
    Terminated(Termination),
}

/// Result of a local search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best tour observed.
    pub tour: Vec<usize>,
    /// Cost of `tour` as reported by the evaluator.
    pub cost: f64,
    /// Run statistics.
    pub stats: SearchStats,
}

struct SearchState {
    best: Vec<usize>,
    best_cost: f64,
    working: Vec<usize>,
    working_cost: f64,
    sweeps: usize,
    improvements: usize,
    stalled_mutations: usize,
}

/// 2-opt improvement engine with mutation-based escape.
///
/// # Examples
///
/// ```
/// use u_tsp::evaluation::TourEvaluator;
/// use u_tsp::local_search::TwoOptSearch;
/// use u_tsp::models::{PinnedEndpoints, SolverConfig};
///
/// let cost = |a: usize, b: usize| (a as f64 - b as f64).abs();
/// let evaluator = TourEvaluator::new(&cost);
/// let config = SolverConfig::default().with_mutation(false);
/// let search = TwoOptSearch::new(&evaluator, PinnedEndpoints::none(), &config);
///
/// let outcome = search.run(vec![0, 3, 2, 1, 4]);
/// assert_eq!(outcome.tour, vec![0, 1, 2, 3, 4]);
/// assert_eq!(outcome.cost, 4.0);
/// ```
pub struct TwoOptSearch<'s, 'a, C: ?Sized> {
    evaluator: &'s TourEvaluator<'a, C>,
    pins: PinnedEndpoints,
    config: &'s SolverConfig,
}

impl<'s, 'a, C: ArcCost + ?Sized> TwoOptSearch<'s, 'a, C> {
    /// Creates a search. Only the mutation and iteration settings of
    /// `config` are used.
    pub fn new(
        evaluator: &'s TourEvaluator<'a, C>,
        pins: PinnedEndpoints,
        config: &'s SolverConfig,
    ) -> Self {
        Self {
            evaluator,
            pins,
            config,
        }
    }

    /// Improves `initial` until a termination condition fires and returns
    /// the best tour seen. Positions held by pinned endpoints never move.
    pub fn run(&self, initial: Vec<usize>) -> SearchOutcome {
        let free = self.pins.free_positions(initial.len());
        let initial_cost = self.evaluator.tour_cost(&initial);
        let mut state = SearchState {
            best: initial.clone(),
            best_cost: initial_cost,
            working: initial,
            working_cost: initial_cost,
            sweeps: 0,
            improvements: 0,
            stalled_mutations: 0,
        };
        let mut mutations = MutationMoves::new(self.config.mutation_seed);

        let mut phase = Phase::Improving;
        let termination = loop {
            phase = match phase {
                Phase::Improving => self.improve(&mut state, free.clone()),
                Phase::StuckMutating => self.mutate(&mut state, free.clone(), &mut mutations),
                Phase::Terminated(reason) => break reason,
            };
        };

        let cost = self.evaluator.tour_cost(&state.best);
        SearchOutcome {
            tour: state.best,
            cost,
            stats: SearchStats {
                sweeps: state.sweeps,
                improvements: state.improvements,
                mutations: mutations.drawn() as usize,
                termination,
            },
        }
    }

    fn improve(&self, state: &mut SearchState, free: Range<usize>) -> Phase {
        if state.sweeps >= self.config.max_iterations {
            return Phase::Terminated(Termination::IterationLimit);
        }

        let improved = self.sweep(state, free);
        state.sweeps += 1;
        trace!(
            event = "sweep",
            sweep = state.sweeps,
            improved,
            working_cost = state.working_cost,
        );

        if improved {
            if state.working_cost < state.best_cost {
                state.best.copy_from_slice(&state.working);
                state.best_cost = state.working_cost;
                state.stalled_mutations = 0;
                debug!(event = "new_best", sweep = state.sweeps, cost = state.best_cost);
            }
            Phase::Improving
        } else if self.config.enable_solution_mutation {
            Phase::StuckMutating
        } else {
            Phase::Terminated(Termination::Converged)
        }
    }

    /// One pass over all free pairs; returns `true` if any move was applied.
    fn sweep(&self, state: &mut SearchState, free: Range<usize>) -> bool {
        let full = self.evaluator.uses_full_cost();
        let mut improved = false;
        for a in free.clone() {
            for b in (a + 1)..free.end {
                if full {
                    let candidate = reversed_segment_copy(&state.working, a, b);
                    let cost = self.evaluator.tour_cost(&candidate);
                    if cost < state.working_cost {
                        state.working = candidate;
                        state.working_cost = cost;
                        state.improvements += 1;
                        improved = true;
                    }
                } else {
                    let delta = self.evaluator.two_opt_delta(&state.working, a, b);
                    if delta < 0.0 {
                        reverse_segment(&mut state.working, a, b);
                        state.working_cost += delta;
                        state.improvements += 1;
                        improved = true;
                    }
                }
            }
        }
        improved
    }

    fn mutate(
        &self,
        state: &mut SearchState,
        free: Range<usize>,
        mutations: &mut MutationMoves,
    ) -> Phase {
        if state.stalled_mutations >= self.config.max_solution_mutations {
            return Phase::Terminated(Termination::MutationLimit);
        }
        let Some((a, b)) = mutations.next_move(free) else {
            return Phase::Terminated(Termination::Converged);
        };

        if self.evaluator.uses_full_cost() {
            reverse_segment(&mut state.working, a, b);
            state.working_cost = self.evaluator.tour_cost(&state.working);
        } else {
            state.working_cost += self.evaluator.two_opt_delta(&state.working, a, b);
            reverse_segment(&mut state.working, a, b);
        }
        state.stalled_mutations += 1;
        trace!(
            event = "mutation",
            a,
            b,
            stalled = state.stalled_mutations,
            working_cost = state.working_cost,
        );
        Phase::Improving
    }
}
