//! Greedy fragment matching ("connect cheapest arcs").
//!
//! # Algorithm
//!
//! Every free node starts as a singleton fragment. Each round scans every
//! pair of live fragments and the four ways to join them end to end:
//!
//! ```text
//! tail(a) -> head(b)   a + b
//! tail(a) -> tail(b)   a + rev(b)
//! head(a) -> head(b)   rev(a) + b
//! head(a) -> tail(b)   rev(a) + rev(b)
//! ```
//!
//! The globally cheapest joining arc wins and its two fragments are replaced
//! by the merged one. Pinned endpoints are reserved singleton fragments that
//! never take part in a join, so they cannot end up buried mid-path; the
//! rounds stop once `1 + pinned` fragments remain, and the final path is
//! `[start] + merged + [end]`.
//!
//! # Complexity
//!
//! O(k²) arc evaluations per join with k live fragments, O(n³) in total.

use crate::evaluation::ArcCost;
use crate::models::PinnedEndpoints;

/// Handle into the fragment arena.
type FragmentId = usize;

/// One of the four end-to-end joins of an ordered fragment pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Join {
    TailHead,
    TailTail,
    HeadHead,
    HeadTail,
}

impl Join {
    const ALL: [Join; 4] = [Join::TailHead, Join::TailTail, Join::HeadHead, Join::HeadTail];

    /// Nodes connected by the joining arc, as `(from, to)`.
    fn arc(self, a: &[usize], b: &[usize]) -> (usize, usize) {
        let (a_head, a_tail) = (a[0], a[a.len() - 1]);
        let (b_head, b_tail) = (b[0], b[b.len() - 1]);
        match self {
            Join::TailHead => (a_tail, b_head),
            Join::TailTail => (a_tail, b_tail),
            Join::HeadHead => (a_head, b_head),
            Join::HeadTail => (a_head, b_tail),
        }
    }

    /// Concatenates `a` and `b` so the joining arc sits at the seam.
    fn merge(self, mut a: Vec<usize>, mut b: Vec<usize>) -> Vec<usize> {
        match self {
            Join::TailHead => {}
            Join::TailTail => b.reverse(),
            Join::HeadHead => a.reverse(),
            Join::HeadTail => {
                a.reverse();
                b.reverse();
            }
        }
        a.append(&mut b);
        a
    }
}

/// Owns fragments by handle; a join empties one slot and refills the other.
struct FragmentArena {
    slots: Vec<Option<Vec<usize>>>,
    live: Vec<FragmentId>,
}

impl FragmentArena {
    fn singletons(nodes: impl IntoIterator<Item = usize>) -> Self {
        let slots: Vec<Option<Vec<usize>>> = nodes.into_iter().map(|n| Some(vec![n])).collect();
        let live = (0..slots.len()).collect();
        Self { slots, live }
    }

    fn len(&self) -> usize {
        self.live.len()
    }

    fn get(&self, id: FragmentId) -> &[usize] {
        self.slots[id].as_deref().unwrap_or_default()
    }

    /// Cheapest join over all live pairs, first found on ties.
    fn cheapest_join<C: ArcCost + ?Sized>(
        &self,
        cost: &C,
    ) -> Option<(FragmentId, FragmentId, Join)> {
        let mut best: Option<(FragmentId, FragmentId, Join, f64)> = None;
        for (pos, &a_id) in self.live.iter().enumerate() {
            let a = self.get(a_id);
            for &b_id in &self.live[pos + 1..] {
                let b = self.get(b_id);
                for join in Join::ALL {
                    let (from, to) = join.arc(a, b);
                    let c = cost.arc_cost(from, to);
                    if best.map_or(true, |(.., best_cost)| c < best_cost) {
                        best = Some((a_id, b_id, join, c));
                    }
                }
            }
        }
        best.map(|(a, b, join, _)| (a, b, join))
    }

    /// Replaces fragments `a` and `b` by their merge, kept under handle `a`.
    fn join(&mut self, a: FragmentId, b: FragmentId, join: Join) {
        let left = self.slots[a].take().unwrap_or_default();
        let right = self.slots[b].take().unwrap_or_default();
        self.slots[a] = Some(join.merge(left, right));
        self.live.retain(|&id| id != b);
    }

    fn into_single(mut self) -> Vec<usize> {
        self.live
            .first()
            .and_then(|&id| self.slots[id].take())
            .unwrap_or_default()
    }
}

/// Constructs a tour by greedily joining fragments along the cheapest arcs.
///
/// # Examples
///
/// ```
/// use u_tsp::constructive::cheapest_arc;
/// use u_tsp::models::PinnedEndpoints;
///
/// let cost = |a: usize, b: usize| (a as f64 - b as f64).abs();
/// let tour = cheapest_arc(5, PinnedEndpoints::none(), &cost);
/// assert_eq!(tour, vec![0, 1, 2, 3, 4]);
///
/// let pinned = cheapest_arc(5, PinnedEndpoints::new(Some(2), Some(0)), &cost);
/// assert_eq!(pinned[0], 2);
/// assert_eq!(pinned[4], 0);
/// ```
pub fn cheapest_arc<C: ArcCost + ?Sized>(n: usize, pins: PinnedEndpoints, cost: &C) -> Vec<usize> {
    let mut arena = FragmentArena::singletons((0..n).filter(|&i| !pins.is_pinned(i)));

    while arena.len() > 1 {
        match arena.cheapest_join(cost) {
            Some((a, b, join)) => arena.join(a, b, join),
            None => break,
        }
    }

    let mut tour = Vec::with_capacity(n);
    tour.extend(pins.start);
    tour.append(&mut arena.into_single());
    tour.extend(pins.end);
    tour
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(tour: &[usize], n: usize) -> bool {
        let mut sorted = tour.to_vec();
        sorted.sort_unstable();
        sorted == (0..n).collect::<Vec<_>>()
    }

    #[test]
    fn test_join_merge_orientations() {
        let a = vec![1, 2];
        let b = vec![3, 4];
        assert_eq!(Join::TailHead.merge(a.clone(), b.clone()), vec![1, 2, 3, 4]);
        assert_eq!(Join::TailTail.merge(a.clone(), b.clone()), vec![1, 2, 4, 3]);
        assert_eq!(Join::HeadHead.merge(a.clone(), b.clone()), vec![2, 1, 3, 4]);
        assert_eq!(Join::HeadTail.merge(a.clone(), b.clone()), vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_join_arc_at_seam() {
        let a = vec![1, 2];
        let b = vec![3, 4];
        for join in Join::ALL {
            let (from, to) = join.arc(&a, &b);
            let merged = join.merge(a.clone(), b.clone());
            assert_eq!((merged[1], merged[2]), (from, to), "{join:?}");
        }
    }

    #[test]
    fn test_cheapest_arc_line() {
        let cost = |a: usize, b: usize| (a as f64 - b as f64).abs();
        let tour = cheapest_arc(6, PinnedEndpoints::none(), &cost);
        assert_eq!(tour, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_cheapest_arc_picks_global_minimum() {
        // Cheapest arcs are 0-2, then 1-3.
        let matrix = [
            [0.0, 5.0, 1.0, 9.0],
            [5.0, 0.0, 9.0, 3.0],
            [1.0, 9.0, 0.0, 9.0],
            [9.0, 3.0, 9.0, 0.0],
        ];
        let cost = |a: usize, b: usize| matrix[a][b];
        let tour = cheapest_arc(4, PinnedEndpoints::none(), &cost);
        assert_eq!(tour, vec![2, 0, 1, 3]);
        let pos = |x: usize| tour.iter().position(|&n| n == x).expect("present");
        assert_eq!(pos(2).abs_diff(pos(0)), 1);
        assert_eq!(pos(1).abs_diff(pos(3)), 1);
    }

    #[test]
    fn test_cheapest_arc_pins_stay_at_ends() {
        // Pinned nodes are the cheapest to connect, but must not be buried.
        let cost = |a: usize, b: usize| if a == 3 || b == 3 { 0.1 } else { 1.0 + (a + b) as f64 };
        let tour = cheapest_arc(6, PinnedEndpoints::new(Some(3), Some(5)), &cost);
        assert!(is_permutation(&tour, 6));
        assert_eq!(tour[0], 3);
        assert_eq!(tour[5], 5);
    }

    #[test]
    fn test_cheapest_arc_start_only() {
        let cost = |a: usize, b: usize| (a as f64 - b as f64).abs();
        let tour = cheapest_arc(5, PinnedEndpoints::new(Some(4), None), &cost);
        assert_eq!(tour[0], 4);
        assert!(is_permutation(&tour, 5));
    }

    #[test]
    fn test_cheapest_arc_only_pins() {
        let cost = |_: usize, _: usize| 1.0;
        assert_eq!(
            cheapest_arc(2, PinnedEndpoints::new(Some(1), Some(0)), &cost),
            vec![1, 0]
        );
    }

    #[test]
    fn test_cheapest_arc_tiny() {
        let cost = |_: usize, _: usize| 1.0;
        assert!(cheapest_arc(0, PinnedEndpoints::none(), &cost).is_empty());
        assert_eq!(cheapest_arc(1, PinnedEndpoints::none(), &cost), vec![0]);
    }

    #[test]
    fn test_cheapest_arc_infinite_costs_still_complete() {
        let cost = |_: usize, _: usize| f64::INFINITY;
        let tour = cheapest_arc(5, PinnedEndpoints::none(), &cost);
        assert!(is_permutation(&tour, 5));
    }
}
