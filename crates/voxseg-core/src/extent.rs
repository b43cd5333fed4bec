//! Extent - the size of a voxel volume
//!
//! An [`Extent`] describes the number of voxels along each axis. Volumes are
//! stored plane-major: one contiguous buffer per z-plane, each buffer laid
//! out row by row.

use crate::error::{Error, Result};
use crate::point::Point3i;
use std::fmt;

/// Size of a volume in voxels
///
/// Every dimension is at least 1; a 2D image is an extent with `depth == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent {
    width: u32,
    height: u32,
    depth: u32,
}

impl Extent {
    /// Create a new extent
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExtent`] if any dimension is 0.
    pub fn new(width: u32, height: u32, depth: u32) -> Result<Self> {
        if width == 0 || height == 0 || depth == 0 {
            return Err(Error::InvalidExtent {
                width,
                height,
                depth,
            });
        }
        Ok(Self {
            width,
            height,
            depth,
        })
    }

    /// Create an extent without validation; callers guarantee non-zero sizes
    pub(crate) const fn new_unchecked(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Create a single-plane extent
    pub fn new_2d(width: u32, height: u32) -> Result<Self> {
        Self::new(width, height, 1)
    }

    /// Width (x-axis)
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height (y-axis)
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Depth (z-axis)
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// True when the extent has more than one z-plane
    #[inline]
    pub fn has_depth(&self) -> bool {
        self.depth > 1
    }

    /// Number of voxels in a single z-plane
    #[inline]
    pub fn area_xy(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Total number of voxels
    #[inline]
    pub fn volume(&self) -> usize {
        self.area_xy() * self.depth as usize
    }

    /// Offset of (x, y) within a plane buffer
    #[inline]
    pub fn offset_xy(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Check whether (x, y, z) lies inside the extent.
    ///
    /// Takes signed coordinates so that neighbor offsets can be tested
    /// before conversion.
    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as u32) < self.width
            && (y as u32) < self.height
            && (z as u32) < self.depth
    }

    /// Check whether a point lies inside the extent
    #[inline]
    pub fn contains_point(&self, point: Point3i) -> bool {
        self.contains(point.x, point.y, point.z)
    }

    /// Iterate over every (x, y, z) in raster order: z outer, then y, x inner.
    pub fn iter_points(&self) -> impl Iterator<Item = Point3i> + use<> {
        let (w, h, d) = (self.width as i32, self.height as i32, self.depth as i32);
        (0..d).flat_map(move |z| (0..h).flat_map(move |y| (0..w).map(move |x| Point3i::new(x, y, z))))
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}
