//! Conditions deciding which pairs of vertices may be joined by an edge
//!
//! A [`BeforeCondition`] is checked first, on the two candidate vertices
//! alone. An [`AfterCondition`] is checked once the merged object and its
//! payload are known. Both are plain traits implemented by the structs in
//! this module and by closures of the matching signature.

use crate::error::{MergeError, MergeResult};
use crate::vertex::ObjectVertex;
use voxseg_core::Resolution;
use voxseg_morph::{Connectivity, Neighborhood, dilate_object};

/// Test applied to a candidate pair before merging it is evaluated
pub trait BeforeCondition: Send + Sync {
    /// Decide whether `a` and `b` are neighbors
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::OperationFailed`] when the test cannot be
    /// evaluated; the error aborts the merge run.
    fn accept(
        &self,
        a: &ObjectVertex,
        b: &ObjectVertex,
        resolution: Option<&Resolution>,
    ) -> MergeResult<bool>;
}

impl<F> BeforeCondition for F
where
    F: Fn(&ObjectVertex, &ObjectVertex, Option<&Resolution>) -> MergeResult<bool> + Send + Sync,
{
    fn accept(
        &self,
        a: &ObjectVertex,
        b: &ObjectVertex,
        resolution: Option<&Resolution>,
    ) -> MergeResult<bool> {
        self(a, b, resolution)
    }
}

/// Test applied to a candidate pair once its merged vertex is known
pub trait AfterCondition: Send + Sync {
    /// Decide whether `merged`, the union of `a` and `b`, is acceptable
    fn accept(
        &self,
        a: &ObjectVertex,
        b: &ObjectVertex,
        merged: &ObjectVertex,
        resolution: Option<&Resolution>,
    ) -> MergeResult<bool>;
}

impl<F> AfterCondition for F
where
    F: Fn(&ObjectVertex, &ObjectVertex, &ObjectVertex, Option<&Resolution>) -> MergeResult<bool>
        + Send
        + Sync,
{
    fn accept(
        &self,
        a: &ObjectVertex,
        b: &ObjectVertex,
        merged: &ObjectVertex,
        resolution: Option<&Resolution>,
    ) -> MergeResult<bool> {
        self(a, b, merged, resolution)
    }
}

/// Accept every pair
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysAccept;

impl BeforeCondition for AlwaysAccept {
    fn accept(
        &self,
        _: &ObjectVertex,
        _: &ObjectVertex,
        _: Option<&Resolution>,
    ) -> MergeResult<bool> {
        Ok(true)
    }
}

/// Accept pairs whose bounding boxes intersect
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundingBoxProximity {
    /// Grow the first box by one voxel on every side before testing, so
    /// that boxes sharing a face also count
    pub grow: bool,
}

impl BoundingBoxProximity {
    /// Create the condition
    pub fn new(grow: bool) -> Self {
        Self { grow }
    }
}

impl BeforeCondition for BoundingBoxProximity {
    fn accept(
        &self,
        a: &ObjectVertex,
        b: &ObjectVertex,
        _: Option<&Resolution>,
    ) -> MergeResult<bool> {
        let box_a = *a.object().bounding_box();
        let box_a = if self.grow { box_a.grow(1, true, None)? } else { box_a };
        Ok(box_a.intersects(b.object().bounding_box()))
    }
}

/// Accept pairs whose bounding boxes lie within a distance of each other
///
/// The distance is the Euclidean length of the per-axis gaps between the
/// boxes, zero when they overlap.
#[derive(Debug, Clone, Copy)]
pub struct DistanceThreshold {
    /// Largest accepted distance
    pub max_distance: f64,
    /// Measure in physical units through the resolution instead of voxels
    pub physical: bool,
}

impl DistanceThreshold {
    /// Threshold measured in voxels
    pub fn voxels(max_distance: f64) -> Self {
        Self {
            max_distance,
            physical: false,
        }
    }

    /// Threshold measured in physical units
    pub fn physical(max_distance: f64) -> Self {
        Self {
            max_distance,
            physical: true,
        }
    }
}

impl BeforeCondition for DistanceThreshold {
    fn accept(
        &self,
        a: &ObjectVertex,
        b: &ObjectVertex,
        resolution: Option<&Resolution>,
    ) -> MergeResult<bool> {
        let (dx, dy, dz) = a.object().bounding_box().axis_distances(b.object().bounding_box());
        let (dx, dy, dz) = (dx as f64, dy as f64, dz as f64);
        let distance = if self.physical {
            let resolution = resolution.ok_or_else(|| {
                MergeError::OperationFailed(
                    "a physical distance threshold requires an image resolution".into(),
                )
            })?;
            resolution.physical_distance(dx, dy, dz)
        } else {
            (dx * dx + dy * dy + dz * dz).sqrt()
        };
        Ok(distance <= self.max_distance)
    }
}

/// Accept pairs whose voxels touch under a connectivity
///
/// The first object is dilated by one voxel and tested for a shared voxel
/// with the second.
#[derive(Debug, Clone, Copy)]
pub struct Touching {
    /// Neighborhood of the dilation
    pub neighborhood: Neighborhood,
}

impl Default for Touching {
    fn default() -> Self {
        Self::new(Connectivity::Small)
    }
}

impl Touching {
    /// Touching in 3D under the given connectivity
    pub fn new(connectivity: Connectivity) -> Self {
        Self {
            neighborhood: Neighborhood::new(connectivity).with_3d(true),
        }
    }

    /// Restrict the test to neighbors within the same plane
    pub fn in_plane(mut self) -> Self {
        self.neighborhood = self.neighborhood.with_3d(false);
        self
    }
}

impl BeforeCondition for Touching {
    fn accept(
        &self,
        a: &ObjectVertex,
        b: &ObjectVertex,
        _: Option<&Resolution>,
    ) -> MergeResult<bool> {
        let (dx, dy, dz) = a.object().bounding_box().axis_distances(b.object().bounding_box());
        if dx > 1 || dy > 1 || dz > 1 {
            return Ok(false);
        }
        let dilated = dilate_object(a.object(), &self.neighborhood, None)?;
        Ok(dilated.intersects(b.object()))
    }
}

/// Reject merged objects larger than a voxel count
#[derive(Debug, Clone, Copy)]
pub struct MaxVoxelCount(pub usize);

impl AfterCondition for MaxVoxelCount {
    fn accept(
        &self,
        _: &ObjectVertex,
        _: &ObjectVertex,
        merged: &ObjectVertex,
        _: Option<&Resolution>,
    ) -> MergeResult<bool> {
        Ok(merged.voxel_count() <= self.0)
    }
}
