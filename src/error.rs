//! Error types for tour construction and solver configuration.

use std::fmt;

use thiserror::Error;

/// Which end of the tour a pin refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// First position of the tour.
    Start,
    /// Last position of the tour.
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// Errors raised by the solver and its building blocks.
///
/// The local search itself never fails; errors only come from
/// configuration, construction, and the permutation primitives.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// A pinned node index does not lie in `[0, node_count)`.
    #[error("{endpoint} node index {index} is out of range 0..{node_count}")]
    NodeOutOfRange {
        /// Which pin was being set.
        endpoint: Endpoint,
        /// The rejected index.
        index: usize,
        /// Number of nodes known to the solver.
        node_count: usize,
    },

    /// A label could not be resolved to a node index.
    #[error("unknown node label `{0}`")]
    UnknownLabel(String),

    /// Start and end were pinned to the same node.
    #[error("start and end are both pinned to node {0}")]
    ConflictingEndpoints(usize),

    /// Nearest-neighbor construction ran out of candidates before the tour
    /// was complete.
    #[error("no feasible continuation from node {from} at tour position {position}")]
    NoFeasibleContinuation {
        /// Node the tour was extended from.
        from: usize,
        /// Position that could not be filled.
        position: usize,
    },

    /// Segment bounds violate `i <= j < len`.
    #[error("segment {i}..={j} is out of bounds for a tour of length {len}")]
    SegmentOutOfBounds {
        /// Segment start.
        i: usize,
        /// Segment end (inclusive).
        j: usize,
        /// Tour length.
        len: usize,
    },
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, TspError>;
