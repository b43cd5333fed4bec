//! Structuring neighborhoods
//!
//! A neighborhood is described by a [`Connectivity`] (small or big) and a
//! dimensionality. In 2D the small neighborhood is 4-connected and the big
//! one 8-connected; in 3D they are 6- and 26-connected.

use voxseg_core::{Extent, Point3i};

/// Connectivity of a structuring neighborhood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Connectivity {
    /// Face neighbors only (4-way in 2D, 6-way in 3D)
    #[default]
    Small,
    /// Face, edge and corner neighbors (8-way in 2D, 26-way in 3D)
    Big,
}

/// A neighborhood around a voxel, excluding the voxel itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Neighborhood {
    /// Connectivity of the neighborhood
    pub connectivity: Connectivity,
    /// Force 2D (`Some(false)`) or 3D (`Some(true)`); `None` picks 3D
    /// exactly when the volume has more than one plane
    pub do_3d: Option<bool>,
}

impl Neighborhood {
    /// Create a neighborhood whose dimensionality follows the volume
    pub fn new(connectivity: Connectivity) -> Self {
        Self {
            connectivity,
            do_3d: None,
        }
    }

    /// Force 2D or 3D regardless of the volume depth
    pub fn with_3d(mut self, do_3d: bool) -> Self {
        self.do_3d = Some(do_3d);
        self
    }

    /// Decide whether the neighborhood spans planes for `extent`
    pub fn is_3d(&self, extent: &Extent) -> bool {
        self.do_3d.unwrap_or_else(|| extent.has_depth())
    }

    /// Relative offsets of every neighbor, in (dz, dy, dx) raster order.
    pub fn offsets(&self, extent: &Extent) -> Vec<Point3i> {
        let z_range = if self.is_3d(extent) { -1..=1i32 } else { 0..=0 };
        let mut offsets = Vec::with_capacity(26);
        for dz in z_range {
            for dy in -1..=1i32 {
                for dx in -1..=1i32 {
                    let manhattan = dx.abs() + dy.abs() + dz.abs();
                    let keep = match self.connectivity {
                        Connectivity::Small => manhattan == 1,
                        Connectivity::Big => manhattan > 0,
                    };
                    if keep {
                        offsets.push(Point3i::new(dx, dy, dz));
                    }
                }
            }
        }
        offsets
    }
}
