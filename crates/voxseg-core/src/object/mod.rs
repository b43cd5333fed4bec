//! ObjectMask - the voxels belonging to one segmented object
//!
//! A mask is a [`BoundingBox`] in global coordinates plus a binary buffer
//! local to that box. Membership is encoded with a [`BinaryValues`] pair;
//! the default convention is 0 = off, 255 = on.

mod collection;

pub use collection::ObjectCollection;

use crate::bbox::BoundingBox;
use crate::error::{Error, Result};
use crate::extent::Extent;
use crate::point::{Point3i, PointRange};
use crate::volume::Volume;

/// The byte values representing "off" and "on" in a binary buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinaryValues {
    off: u8,
    on: u8,
}

impl Default for BinaryValues {
    fn default() -> Self {
        Self { off: 0, on: 255 }
    }
}

impl BinaryValues {
    /// Create a new pair
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `off == on`.
    pub fn new(off: u8, on: u8) -> Result<Self> {
        if off == on {
            return Err(Error::InvalidParameter(format!(
                "binary on and off values must differ (both {})",
                on
            )));
        }
        Ok(Self { off, on })
    }

    /// Value representing a background voxel
    #[inline]
    pub fn off(&self) -> u8 {
        self.off
    }

    /// Value representing an object voxel
    #[inline]
    pub fn on(&self) -> u8 {
        self.on
    }
}

/// The voxels of one object, local to its bounding box
///
/// # Examples
///
/// ```
/// use voxseg_core::{ObjectMask, Point3i};
///
/// let mask = ObjectMask::from_points([Point3i::new(2, 3, 0), Point3i::new(3, 3, 0)]).unwrap();
/// assert_eq!(mask.count_on(), 2);
/// assert_eq!(mask.bounding_box().corner(), Point3i::new(2, 3, 0));
/// assert!(mask.contains(Point3i::new(3, 3, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMask {
    bbox: BoundingBox,
    voxels: Volume<u8>,
    binary_values: BinaryValues,
}

impl ObjectMask {
    /// Create a mask covering `bbox` with every voxel off
    pub fn new_empty(bbox: BoundingBox) -> Self {
        let binary_values = BinaryValues::default();
        Self {
            bbox,
            voxels: Volume::new_filled(bbox.extent(), binary_values.off()),
            binary_values,
        }
    }

    /// Create a mask from an existing local buffer
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExtentMismatch`] if the buffer extent differs from
    /// the box extent.
    pub fn from_voxels(
        bbox: BoundingBox,
        voxels: Volume<u8>,
        binary_values: BinaryValues,
    ) -> Result<Self> {
        if voxels.extent() != bbox.extent() {
            return Err(Error::ExtentMismatch {
                expected: bbox.extent(),
                actual: voxels.extent(),
            });
        }
        Ok(Self {
            bbox,
            voxels,
            binary_values,
        })
    }

    /// Create a mask containing exactly the given global points.
    ///
    /// Returns `None` when `points` is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3i>,
    {
        let points: Vec<Point3i> = points.into_iter().collect();
        let mut range = PointRange::new();
        for &p in &points {
            range.add(p);
        }
        let mut mask = Self::new_empty(range.to_bounding_box()?);
        for p in points {
            mask.set_on_unchecked(p);
        }
        Some(mask)
    }

    /// Bounding box in global coordinates
    #[inline]
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Local binary buffer
    #[inline]
    pub fn voxels(&self) -> &Volume<u8> {
        &self.voxels
    }

    /// Mutable local binary buffer
    #[inline]
    pub fn voxels_mut(&mut self) -> &mut Volume<u8> {
        &mut self.voxels
    }

    /// The on/off convention of the buffer
    #[inline]
    pub fn binary_values(&self) -> BinaryValues {
        self.binary_values
    }

    /// Test a local (box-relative) coordinate; false outside the box
    #[inline]
    pub fn is_on_local(&self, rel: Point3i) -> bool {
        self.voxels.get_point(rel) == Some(self.binary_values.on())
    }

    /// Test whether a global point belongs to the object
    #[inline]
    pub fn contains(&self, point: Point3i) -> bool {
        self.is_on_local(self.bbox.relative(point))
    }

    /// Switch a global point on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the point lies outside the box.
    pub fn set_on(&mut self, point: Point3i) -> Result<()> {
        if !self.bbox.contains(point) {
            return Err(Error::IndexOutOfBounds {
                x: point.x as i64,
                y: point.y as i64,
                z: point.z as i64,
                extent: self.bbox.extent(),
            });
        }
        self.set_on_unchecked(point);
        Ok(())
    }

    fn set_on_unchecked(&mut self, point: Point3i) {
        let rel = self.bbox.relative(point);
        self.voxels
            .set_unchecked(rel.x as u32, rel.y as u32, rel.z as u32, self.binary_values.on());
    }

    /// Number of on voxels
    pub fn count_on(&self) -> usize {
        self.voxels.count_equal(self.binary_values.on())
    }

    /// True when no voxel is on
    pub fn is_empty(&self) -> bool {
        !self.voxels.values().any(|v| v == self.binary_values.on())
    }

    /// Iterate over the global coordinates of on voxels in raster order
    /// (z outer, then y, x inner).
    pub fn iter_points(&self) -> impl Iterator<Item = Point3i> + '_ {
        let corner = self.bbox.corner();
        self.bbox
            .extent()
            .iter_points()
            .filter(move |&rel| self.is_on_local(rel))
            .map(move |rel| rel + corner)
    }

    /// First on voxel in raster order.
    ///
    /// Used as a fixed representative point of the object.
    pub fn first_point(&self) -> Option<Point3i> {
        self.iter_points().next()
    }

    /// Combine two masks into one covering both sets of voxels.
    ///
    /// The result uses the default binary convention.
    pub fn union(&self, other: &ObjectMask) -> ObjectMask {
        let mut merged = ObjectMask::new_empty(self.bbox.union(&other.bbox));
        for p in self.iter_points().chain(other.iter_points()) {
            merged.set_on_unchecked(p);
        }
        merged
    }

    /// Check whether two masks share at least one on voxel.
    ///
    /// Membership is compared through each mask's own convention, so masks
    /// with different binary values compare correctly.
    pub fn intersects(&self, other: &ObjectMask) -> bool {
        self.count_intersecting(other) > 0
    }

    /// Number of voxels that are on in both masks
    pub fn count_intersecting(&self, other: &ObjectMask) -> usize {
        match self.bbox.intersection(&other.bbox) {
            Some(overlap) => {
                let corner = overlap.corner();
                overlap
                    .extent()
                    .iter_points()
                    .map(|rel| rel + corner)
                    .filter(|&p| self.contains(p) && other.contains(p))
                    .count()
            }
            None => 0,
        }
    }

    /// Restrict the mask to a volume extent anchored at the origin.
    ///
    /// Returns `None` if no part of the box lies inside `extent`.
    pub fn clip_to(&self, extent: &Extent) -> Option<ObjectMask> {
        let clipped = self.bbox.clip_to(extent)?;
        if clipped == self.bbox {
            return Some(self.clone());
        }
        let mut out = ObjectMask::new_empty(clipped);
        out.binary_values = self.binary_values;
        out.voxels.fill(self.binary_values.off());
        for p in self.iter_points().filter(|&p| clipped.contains(p)) {
            out.set_on_unchecked(p);
        }
        Some(out)
    }
}
