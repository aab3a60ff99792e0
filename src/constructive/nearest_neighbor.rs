//! Nearest-neighbor constructive heuristic.
//!
//! Builds the path greedily: from the current node, always move to the
//! unvisited node reachable by the cheapest arc. A pinned end node is held
//! out of the candidate pool and appended last.
//!
//! # Complexity
//!
//! O(n²) arc evaluations.

use crate::error::{Result, TspError};
use crate::evaluation::ArcCost;
use crate::models::PinnedEndpoints;

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// The path starts at the pinned start node. Without one, it starts at the
/// node other than 0 that is cheapest to reach from node 0; node 0 itself
/// stays in the pool. A lone node 0 starts its own path.
///
/// Ties are broken by lowest index. An arc whose cost is not finite is
/// treated as missing.
///
/// # Errors
///
/// Returns [`TspError::NoFeasibleContinuation`] if some step has no
/// unvisited node reachable by a finite-cost arc.
///
/// # Examples
///
/// ```
/// use u_tsp::constructive::nearest_neighbor;
/// use u_tsp::models::PinnedEndpoints;
///
/// let cost = |a: usize, b: usize| (a as f64 - b as f64).abs();
/// let tour = nearest_neighbor(4, PinnedEndpoints::new(Some(2), None), &cost).unwrap();
/// assert_eq!(tour, vec![2, 1, 0, 3]);
/// ```
pub fn nearest_neighbor<C: ArcCost + ?Sized>(
    n: usize,
    pins: PinnedEndpoints,
    cost: &C,
) -> Result<Vec<usize>> {
    let mut visited = vec![false; n];
    if let Some(end) = pins.end {
        visited[end] = true;
    }

    // Positions filled by chaining; the pinned end takes the last one.
    let steps = n.saturating_sub(usize::from(pins.end.is_some()));
    let mut tour = Vec::with_capacity(n);

    if steps > 0 {
        let first = match pins.start {
            Some(start) => start,
            None => cheapest_unvisited(0, &visited, cost)
                .or_else(|| (!visited[0]).then_some(0))
                .ok_or(TspError::NoFeasibleContinuation { from: 0, position: 0 })?,
        };
        visited[first] = true;
        tour.push(first);

        let mut current = first;
        while tour.len() < steps {
            let next = cheapest_unvisited(current, &visited, cost).ok_or(
                TspError::NoFeasibleContinuation {
                    from: current,
                    position: tour.len(),
                },
            )?;
            visited[next] = true;
            tour.push(next);
            current = next;
        }
    }

    tour.extend(pins.end);
    Ok(tour)
}

/// Unvisited node other than `from` with the cheapest finite arc from `from`,
/// lowest index on ties.
fn cheapest_unvisited<C: ArcCost + ?Sized>(
    from: usize,
    visited: &[bool],
    cost: &C,
) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut best_cost = f64::INFINITY;
    for (node, &seen) in visited.iter().enumerate() {
        if seen || node == from {
            continue;
        }
        let c = cost.arc_cost(from, node);
        if c < best_cost {
            best_cost = c;
            best = Some(node);
        }
    }
    best
}
