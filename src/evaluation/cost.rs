//! Opaque cost callbacks.
//!
//! Costs are never stored as a matrix; the solver only ever asks for the cost
//! of one arc or of one complete tour. Both traits are implemented for plain
//! closures, so callers usually pass a `Fn` directly.

/// Cost of travelling directly from one location to another.
///
/// May be asymmetric and need not satisfy the triangle inequality.
///
/// # Examples
///
/// ```
/// use u_tsp::evaluation::ArcCost;
///
/// let matrix = [[0.0, 2.0], [3.0, 0.0]];
/// let cost = |from: usize, to: usize| matrix[from][to];
/// assert_eq!(cost.arc_cost(0, 1), 2.0);
/// assert_eq!(cost.arc_cost(1, 0), 3.0);
/// ```
pub trait ArcCost {
    /// Cost of the arc `from -> to`.
    fn arc_cost(&self, from: usize, to: usize) -> f64;
}

impl<F> ArcCost for F
where
    F: Fn(usize, usize) -> f64,
{
    fn arc_cost(&self, from: usize, to: usize) -> f64 {
        self(from, to)
    }
}

/// Cost of a complete tour, authoritative over the sum of arc costs.
///
/// Used in full-validation mode, where the cost may be non-additive.
pub trait TourCost {
    /// Cost of visiting the nodes in `tour` order.
    fn tour_cost(&self, tour: &[usize]) -> f64;
}

impl<F> TourCost for F
where
    F: Fn(&[usize]) -> f64,
{
    fn tour_cost(&self, tour: &[usize]) -> f64 {
        self(tour)
    }
}

/// Sum of arc costs along an open path: `tour[0] -> tour[1] -> ... -> tour[n-1]`.
///
/// # Examples
///
/// ```
/// use u_tsp::evaluation::path_cost;
///
/// let cost = |a: usize, b: usize| (a as f64 - b as f64).abs();
/// assert_eq!(path_cost(&cost, &[0, 2, 1]), 3.0);
/// assert_eq!(path_cost(&cost, &[4]), 0.0);
/// ```
pub fn path_cost<C: ArcCost + ?Sized>(cost: &C, tour: &[usize]) -> f64 {
    tour.windows(2).map(|w| cost.arc_cost(w[0], w[1])).sum()
}

/// Returns `true` if `cost(i, j)` and `cost(j, i)` agree within `tol` for all
/// pairs of distinct nodes in `[0, n)`.
///
/// Incremental 2-opt evaluation is exact only for symmetric costs; callers
/// with asymmetric costs should enable full-validation mode.
pub fn is_symmetric<C: ArcCost + ?Sized>(n: usize, cost: &C, tol: f64) -> bool {
    for i in 0..n {
        for j in (i + 1)..n {
            if (cost.arc_cost(i, j) - cost.arc_cost(j, i)).abs() > tol {
                return false;
            }
        }
    }
    true
}
