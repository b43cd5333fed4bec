//! Graph vertices: objects with a payload

use std::cell::OnceCell;
use std::fmt;
use voxseg_core::ObjectMask;

/// Identifier of a vertex in a [`NeighborGraph`](crate::NeighborGraph).
///
/// Ids are handed out in insertion order and never reused, so a merged
/// vertex always has a larger id than both of its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Position of the vertex in insertion order
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// An object together with the payload computed for it
#[derive(Debug, Clone)]
pub struct ObjectVertex {
    object: ObjectMask,
    payload: f64,
    voxel_count: OnceCell<usize>,
}

impl ObjectVertex {
    /// Create a vertex
    pub fn new(object: ObjectMask, payload: f64) -> Self {
        Self {
            object,
            payload,
            voxel_count: OnceCell::new(),
        }
    }

    /// The object mask
    #[inline]
    pub fn object(&self) -> &ObjectMask {
        &self.object
    }

    /// The payload
    #[inline]
    pub fn payload(&self) -> f64 {
        self.payload
    }

    /// Number of on voxels, computed on first use
    pub fn voxel_count(&self) -> usize {
        *self.voxel_count.get_or_init(|| self.object.count_on())
    }

    /// Consume the vertex, returning its object
    pub fn into_object(self) -> ObjectMask {
        self.object
    }
}
