//! BoundingBox - axis-aligned integer boxes
//!
//! A box is a corner plus an [`Extent`]; both corners are inclusive when
//! expressed as min/max points.

use crate::error::{Error, Result};
use crate::extent::Extent;
use crate::point::Point3i;

/// An axis-aligned box in voxel coordinates
///
/// Small and `Copy`; boxes are derived once and then only read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    corner: Point3i,
    extent: Extent,
}

impl BoundingBox {
    /// Create a box from its minimum corner and size
    pub fn new(corner: Point3i, extent: Extent) -> Self {
        Self { corner, extent }
    }

    /// Create a box covering the whole of `extent`, anchored at the origin
    pub fn from_extent(extent: Extent) -> Self {
        Self::new(Point3i::default(), extent)
    }

    /// Create a box spanning `min..=max` on every axis.
    ///
    /// Coordinates of `max` below those of `min` collapse to a single voxel
    /// on that axis.
    pub fn from_inclusive_corners(min: Point3i, max: Point3i) -> Self {
        let max = max.max(min);
        let extent = Extent::new_unchecked(
            (max.x - min.x + 1) as u32,
            (max.y - min.y + 1) as u32,
            (max.z - min.z + 1) as u32,
        );
        Self::new(min, extent)
    }

    /// Minimum corner
    #[inline]
    pub fn corner(&self) -> Point3i {
        self.corner
    }

    /// Size of the box
    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Maximum corner (inclusive)
    #[inline]
    pub fn max_inclusive(&self) -> Point3i {
        Point3i::new(
            self.corner.x + self.extent.width() as i32 - 1,
            self.corner.y + self.extent.height() as i32 - 1,
            self.corner.z + self.extent.depth() as i32 - 1,
        )
    }

    /// Area of the box in the XY plane (depth ignored)
    #[inline]
    pub fn area_xy(&self) -> u64 {
        self.extent.area_xy() as u64
    }

    /// Number of voxels in the box
    #[inline]
    pub fn volume(&self) -> u64 {
        self.extent.volume() as u64
    }

    /// Check whether a global point lies inside the box
    pub fn contains(&self, point: Point3i) -> bool {
        let rel = point - self.corner;
        self.extent.contains_point(rel)
    }

    /// Convert a global point to coordinates relative to the corner
    #[inline]
    pub fn relative(&self, point: Point3i) -> Point3i {
        point - self.corner
    }

    /// Check whether two boxes share at least one voxel
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.intersection(other).is_some()
    }

    /// Compute the intersection of two boxes
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        let min = self.corner.max(other.corner);
        let max = self.max_inclusive().min(other.max_inclusive());
        if min.x <= max.x && min.y <= max.y && min.z <= max.z {
            Some(Self::from_inclusive_corners(min, max))
        } else {
            None
        }
    }

    /// Compute the smallest box containing both boxes
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        Self::from_inclusive_corners(
            self.corner.min(other.corner),
            self.max_inclusive().max(other.max_inclusive()),
        )
    }

    /// Grow the box by `margin` voxels on every side.
    ///
    /// The z-axis is only grown when `do_z` is set. When `clip` is given the
    /// result is clipped to that extent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the grown box does not overlap
    /// `clip` at all.
    pub fn grow(&self, margin: u32, do_z: bool, clip: Option<&Extent>) -> Result<BoundingBox> {
        let m = margin as i32;
        let mz = if do_z { m } else { 0 };
        let delta = Point3i::new(m, m, mz);
        let grown = Self::from_inclusive_corners(self.corner - delta, self.max_inclusive() + delta);
        match clip {
            Some(extent) => grown.clip_to(extent).ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "box at {:?} lies outside the extent {}",
                    self.corner, extent
                ))
            }),
            None => Ok(grown),
        }
    }

    /// Clip the box to lie within `extent` (anchored at the origin)
    pub fn clip_to(&self, extent: &Extent) -> Option<BoundingBox> {
        self.intersection(&BoundingBox::from_extent(*extent))
    }

    /// Distance in voxels between the nearest voxels of two boxes along
    /// each axis; 0 on an axis where the boxes overlap.
    pub fn axis_distances(&self, other: &BoundingBox) -> (u32, u32, u32) {
        fn axis(a_min: i32, a_max: i32, b_min: i32, b_max: i32) -> u32 {
            if b_min > a_max {
                (b_min - a_max) as u32
            } else if a_min > b_max {
                (a_min - b_max) as u32
            } else {
                0
            }
        }
        let (a_max, b_max) = (self.max_inclusive(), other.max_inclusive());
        (
            axis(self.corner.x, a_max.x, other.corner.x, b_max.x),
            axis(self.corner.y, a_max.y, other.corner.y, b_max.y),
            axis(self.corner.z, a_max.z, other.corner.z, b_max.z),
        )
    }
}
