//! Pinned tour endpoints.

/// Optional pins for the first and last tour positions.
///
/// # Examples
///
/// ```
/// use u_tsp::models::PinnedEndpoints;
///
/// let pins = PinnedEndpoints::new(Some(2), None);
/// assert!(pins.is_pinned(2));
/// assert!(!pins.is_pinned(0));
/// assert_eq!(pins.count(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinnedEndpoints {
    /// Node fixed at position 0.
    pub start: Option<usize>,
    /// Node fixed at position N-1.
    pub end: Option<usize>,
}

impl PinnedEndpoints {
    /// Creates pins from optional start and end nodes.
    pub fn new(start: Option<usize>, end: Option<usize>) -> Self {
        Self { start, end }
    }

    /// No pinned endpoints.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns `true` if `node` is pinned at either end.
    pub fn is_pinned(&self, node: usize) -> bool {
        self.start == Some(node) || self.end == Some(node)
    }

    /// Number of pinned endpoints (0, 1 or 2).
    pub fn count(&self) -> usize {
        usize::from(self.start.is_some()) + usize::from(self.end.is_some())
    }

    /// Half-open range of tour positions that local search may move.
    ///
    /// Excludes position 0 when the start is pinned and position `len - 1`
    /// when the end is pinned.
    pub fn free_positions(&self, len: usize) -> std::ops::Range<usize> {
        let lo = usize::from(self.start.is_some());
        let hi = len.saturating_sub(usize::from(self.end.is_some()));
        lo..hi.max(lo)
    }
}
