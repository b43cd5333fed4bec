//! Integer voxel coordinates and point ranges
//!
//! [`Point3i`] orders lexicographically on x, then y, then z. The merge
//! engine relies on this order to break priority ties reproducibly.
//!
//! [`PointRange`] accumulates the minimum and maximum coordinate seen along
//! each axis and finalizes into a [`BoundingBox`].

use crate::bbox::BoundingBox;
use std::ops::{Add, Sub};

/// An integer voxel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point3i {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
    /// Z coordinate
    pub z: i32,
}

impl Point3i {
    /// Create a new point
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

impl Add for Point3i {
    type Output = Point3i;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3i {
    type Output = Point3i;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Running minimum/maximum of the points observed for one label
///
/// Lifecycle: [`PointRange::new`] (empty) → [`PointRange::add`] for every
/// observed point → [`PointRange::to_bounding_box`]. An empty range has no
/// bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointRange {
    bounds: Option<(Point3i, Point3i)>,
}

impl PointRange {
    /// Create an empty range
    pub const fn new() -> Self {
        Self { bounds: None }
    }

    /// Include a point in the range
    #[inline]
    pub fn add(&mut self, point: Point3i) {
        self.bounds = Some(match self.bounds {
            Some((min, max)) => (min.min(point), max.max(point)),
            None => (point, point),
        });
    }

    /// Include (x, y, z) in the range
    #[inline]
    pub fn add_xyz(&mut self, x: i32, y: i32, z: i32) {
        self.add(Point3i::new(x, y, z));
    }

    /// True when no point has been added
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Smallest observed coordinate on each axis
    pub fn min(&self) -> Option<Point3i> {
        self.bounds.map(|(min, _)| min)
    }

    /// Largest observed coordinate on each axis
    pub fn max(&self) -> Option<Point3i> {
        self.bounds.map(|(_, max)| max)
    }

    /// Finalize into a bounding box (inclusive of both corners).
    ///
    /// Returns `None` for an empty range.
    pub fn to_bounding_box(&self) -> Option<BoundingBox> {
        self.bounds
            .map(|(min, max)| BoundingBox::from_inclusive_corners(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_order_is_x_then_y_then_z() {
        let a = Point3i::new(0, 5, 5);
        let b = Point3i::new(1, 0, 0);
        let c = Point3i::new(1, 0, 1);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_empty_range_has_no_box() {
        let range = PointRange::new();
        assert!(range.is_empty());
        assert!(range.to_bounding_box().is_none());
    }

    #[test]
    fn test_range_accumulates() {
        let mut range = PointRange::new();
        range.add_xyz(3, 1, 0);
        range.add_xyz(1, 4, 2);
        range.add_xyz(2, 2, 1);
        assert_eq!(range.min(), Some(Point3i::new(1, 1, 0)));
        assert_eq!(range.max(), Some(Point3i::new(3, 4, 2)));

        let bbox = range.to_bounding_box().unwrap();
        assert_eq!(bbox.corner(), Point3i::new(1, 1, 0));
        assert_eq!(bbox.extent().width(), 3);
        assert_eq!(bbox.extent().height(), 4);
        assert_eq!(bbox.extent().depth(), 3);
    }
}
