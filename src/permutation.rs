//! Segment reversal primitives.
//!
//! Every 2-opt move is a reversal of a contiguous segment `tour[i..=j]`. The
//! public functions check their bounds and report [`TspError::SegmentOutOfBounds`];
//! the search engine uses the unchecked crate-internal variants on indices it
//! derives itself.

use crate::error::{Result, TspError};

fn check_segment(len: usize, i: usize, j: usize) -> Result<()> {
    if i <= j && j < len {
        Ok(())
    } else {
        Err(TspError::SegmentOutOfBounds { i, j, len })
    }
}

/// Reverses `tour[i..=j]` in place.
///
/// Self-inverse: applying it twice with the same bounds restores the input.
///
/// # Errors
///
/// Returns [`TspError::SegmentOutOfBounds`] unless `i <= j < tour.len()`.
///
/// # Examples
///
/// ```
/// use u_tsp::permutation::reverse_in_place;
///
/// let mut tour = vec![0, 1, 2, 3, 4, 5, 6];
/// reverse_in_place(&mut tour, 2, 5).unwrap();
/// assert_eq!(tour, vec![0, 1, 5, 4, 3, 2, 6]);
/// ```
pub fn reverse_in_place(tour: &mut [usize], i: usize, j: usize) -> Result<()> {
    check_segment(tour.len(), i, j)?;
    reverse_segment(tour, i, j);
    Ok(())
}

/// Returns a copy of `tour` with `[i..=j]` reversed, leaving `tour` untouched.
///
/// # Errors
///
/// Returns [`TspError::SegmentOutOfBounds`] unless `i <= j < tour.len()`.
///
/// # Examples
///
/// ```
/// use u_tsp::permutation::reversed_copy;
///
/// let tour = vec![3, 1, 0, 2];
/// assert_eq!(reversed_copy(&tour, 0, 1).unwrap(), vec![1, 3, 0, 2]);
/// assert_eq!(tour, vec![3, 1, 0, 2]);
/// assert!(reversed_copy(&tour, 1, 4).is_err());
/// ```
pub fn reversed_copy(tour: &[usize], i: usize, j: usize) -> Result<Vec<usize>> {
    check_segment(tour.len(), i, j)?;
    Ok(reversed_segment_copy(tour, i, j))
}

/// Unchecked in-place reversal. Panics on invalid bounds.
pub(crate) fn reverse_segment(tour: &mut [usize], i: usize, j: usize) {
    tour[i..=j].reverse();
}

/// Unchecked copying reversal. Panics on invalid bounds.
pub(crate) fn reversed_segment_copy(tour: &[usize], i: usize, j: usize) -> Vec<usize> {
    let mut copy = tour.to_vec();
    reverse_segment(&mut copy, i, j);
    copy
}
