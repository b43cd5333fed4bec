//! Prioritized edges between neighboring vertices

use crate::vertex::{ObjectVertex, VertexId};
use std::cmp::Ordering;
use std::fmt;
use voxseg_core::Point3i;

/// Identifier of an edge in a [`NeighborGraph`](crate::NeighborGraph).
///
/// Slots of removed edges are recycled, so an id is only meaningful while
/// its edge is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Priority of a candidate merge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePriority {
    /// Larger values are merged first
    pub priority: f64,
    /// Whether the edge may be selected at all
    pub consider_for_merge: bool,
}

impl EdgePriority {
    /// Create a priority
    pub fn new(priority: f64, consider_for_merge: bool) -> Self {
        Self {
            priority,
            consider_for_merge,
        }
    }

    /// A priority eligible for merging
    pub fn eligible(priority: f64) -> Self {
        Self::new(priority, true)
    }

    /// A priority recorded on the edge but never selected
    pub fn ineligible(priority: f64) -> Self {
        Self::new(priority, false)
    }
}

/// An edge with its priority and the precomputed result of merging its
/// endpoints
#[derive(Debug, Clone)]
pub struct PrioritizedEdge {
    pub(crate) source: VertexId,
    pub(crate) target: VertexId,
    pub(crate) priority: EdgePriority,
    pub(crate) merged: ObjectVertex,
    pub(crate) representative: Option<Point3i>,
    pub(crate) sequence: u64,
}

impl PrioritizedEdge {
    /// The newer endpoint (the vertex whose insertion created the edge)
    #[inline]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// The older endpoint
    #[inline]
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Both endpoints
    #[inline]
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.source, self.target)
    }

    /// The assigned priority
    #[inline]
    pub fn priority(&self) -> EdgePriority {
        self.priority
    }

    /// The vertex that merging the endpoints would produce
    #[inline]
    pub fn merged(&self) -> &ObjectVertex {
        &self.merged
    }

    /// First on voxel of the merged object, used to break priority ties
    #[inline]
    pub fn representative(&self) -> Option<Point3i> {
        self.representative
    }
}

/// Selection order of eligible edges.
///
/// The greatest key wins: highest priority, then the smallest
/// representative point, then the oldest edge.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SelectionKey {
    pub(crate) priority: f64,
    pub(crate) representative: Option<Point3i>,
    pub(crate) sequence: u64,
    pub(crate) edge: EdgeId,
}

impl SelectionKey {
    pub(crate) fn of(edge_id: EdgeId, edge: &PrioritizedEdge) -> Self {
        Self {
            priority: edge.priority.priority,
            representative: edge.representative,
            sequence: edge.sequence,
            edge: edge_id,
        }
    }
}

impl Ord for SelectionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| other.representative.cmp(&self.representative))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for SelectionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SelectionKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SelectionKey {}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(priority: f64, x: i32, sequence: u64) -> SelectionKey {
        SelectionKey {
            priority,
            representative: Some(Point3i::new(x, 0, 0)),
            sequence,
            edge: EdgeId(sequence as usize),
        }
    }

    #[test]
    fn test_selection_order() {
        assert!(key(2.0, 9, 9) > key(1.0, 0, 0));
        // Equal priority: smaller representative wins
        assert!(key(1.0, 0, 5) > key(1.0, 1, 0));
        // Equal priority and point: older edge wins
        assert!(key(1.0, 0, 0) > key(1.0, 0, 1));
    }
}
