//! Random 2-opt moves used to escape local minima.
//!
//! The generator is reseeded before every move: move k (0-based) is drawn from
//! `StdRng::seed_from_u64(seed + k)`, so the sequence of moves depends only on
//! the starting seed and the size of the free range.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Counter-reseeded source of uniformly random 2-opt moves.
#[derive(Debug, Clone)]
pub struct MutationMoves {
    seed: u64,
    drawn: u64,
}

impl MutationMoves {
    /// Creates a generator whose first move uses `seed`.
    pub fn new(seed: u64) -> Self {
        Self { seed, drawn: 0 }
    }

    /// Number of moves drawn so far.
    pub fn drawn(&self) -> u64 {
        self.drawn
    }

    /// Draws a move `(a, b)` with `a < b`, uniform over all such pairs inside
    /// `free`. Returns `None` if `free` holds fewer than two positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::local_search::MutationMoves;
    ///
    /// let mut moves = MutationMoves::new(1);
    /// let (a, b) = moves.next_move(1..6).unwrap();
    /// assert!(1 <= a && a < b && b < 6);
    /// assert!(moves.next_move(3..4).is_none());
    /// ```
    pub fn next_move(&mut self, free: Range<usize>) -> Option<(usize, usize)> {
        let len = free.len();
        if len < 2 {
            return None;
        }
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(self.drawn));
        self.drawn += 1;

        let pairs = len * (len - 1) / 2;
        let mut k = rng.random_range(0..pairs);
        // Row `a` holds the pairs (a, a+1..len).
        for a in 0..len - 1 {
            let row = len - 1 - a;
            if k < row {
                return Some((free.start + a, free.start + a + 1 + k));
            }
            k -= row;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_in_range() {
        let mut moves = MutationMoves::new(1);
        for _ in 0..200 {
            let (a, b) = moves.next_move(2..9).expect("enough positions");
            assert!((2..9).contains(&a));
            assert!((2..9).contains(&b));
            assert!(a < b);
        }
        assert_eq!(moves.drawn(), 200);
    }

    #[test]
    fn test_moves_cover_all_pairs() {
        let mut moves = MutationMoves::new(100);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(moves.next_move(0..4).expect("enough positions"));
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_moves_reproducible() {
        let mut first = MutationMoves::new(17);
        let mut second = MutationMoves::new(17);
        for _ in 0..20 {
            assert_eq!(first.next_move(0..12), second.next_move(0..12));
        }
    }

    #[test]
    fn test_reseed_per_move() {
        // Move k of a generator seeded with s equals move 0 of one seeded with s + k.
        let mut stream = MutationMoves::new(5);
        stream.next_move(0..30);
        stream.next_move(0..30);
        let third = stream.next_move(0..30);
        assert_eq!(third, MutationMoves::new(7).next_move(0..30));
    }

    #[test]
    fn test_too_small() {
        let mut moves = MutationMoves::new(1);
        assert!(moves.next_move(0..1).is_none());
        assert!(moves.next_move(4..4).is_none());
        assert_eq!(moves.drawn(), 0);
    }

    #[test]
    fn test_single_pair() {
        let mut moves = MutationMoves::new(9);
        assert_eq!(moves.next_move(3..5), Some((3, 4)));
    }
}
