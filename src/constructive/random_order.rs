//! Random-order construction.
//!
//! Places the pinned endpoints and shuffles everything else. No quality
//! guarantee; useful as a fast baseline or as a diverse starting point.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::PinnedEndpoints;

/// Builds a tour of `n` nodes in uniformly random order, respecting pins.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_tsp::constructive::random_order;
/// use u_tsp::models::PinnedEndpoints;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let tour = random_order(6, PinnedEndpoints::new(Some(3), Some(0)), &mut rng);
/// assert_eq!(tour.len(), 6);
/// assert_eq!(tour[0], 3);
/// assert_eq!(tour[5], 0);
/// ```
pub fn random_order<R: Rng + ?Sized>(n: usize, pins: PinnedEndpoints, rng: &mut R) -> Vec<usize> {
    let mut middle: Vec<usize> = (0..n).filter(|&i| !pins.is_pinned(i)).collect();
    middle.shuffle(rng);

    let mut tour = Vec::with_capacity(n);
    tour.extend(pins.start);
    tour.append(&mut middle);
    tour.extend(pins.end);
    tour
}
