//! Volume - the main voxel container
//!
//! # Layout
//!
//! - Data is stored plane-major: one `Vec<V>` per z-plane
//! - Each plane is laid out row by row (`x + y * width`)
//! - The extent is fixed at creation; voxel values may be changed in place
//!
//! Plane-level access ([`Volume::plane`], [`Volume::plane_mut`]) is the
//! intended path for raster scans; per-voxel accessors are bounds-checked
//! convenience wrappers.

use crate::error::{Error, Result};
use crate::extent::Extent;
use crate::point::Point3i;
use crate::voxel::Voxel;

/// A 3D array of voxel values
///
/// # Examples
///
/// ```
/// use voxseg_core::{Extent, Volume};
///
/// let extent = Extent::new(4, 4, 2).unwrap();
/// let mut vol: Volume<u8> = Volume::new(extent);
/// vol.set(1, 2, 1, 200).unwrap();
/// assert_eq!(vol.get(1, 2, 1), Some(200));
/// assert_eq!(vol.get(4, 0, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume<V: Voxel> {
    extent: Extent,
    planes: Vec<Vec<V>>,
}

impl<V: Voxel> Volume<V> {
    /// Create a volume with every voxel set to zero
    pub fn new(extent: Extent) -> Self {
        Self::new_filled(extent, V::ZERO)
    }

    /// Create a volume with every voxel set to `value`
    pub fn new_filled(extent: Extent, value: V) -> Self {
        let planes = (0..extent.depth())
            .map(|_| vec![value; extent.area_xy()])
            .collect();
        Self { extent, planes }
    }

    /// Create a volume from existing plane buffers
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the number of planes or the
    /// length of any plane does not match `extent`.
    pub fn from_planes(extent: Extent, planes: Vec<Vec<V>>) -> Result<Self> {
        if planes.len() != extent.depth() as usize {
            return Err(Error::InvalidParameter(format!(
                "expected {} planes, got {}",
                extent.depth(),
                planes.len()
            )));
        }
        if let Some((z, plane)) = planes
            .iter()
            .enumerate()
            .find(|(_, p)| p.len() != extent.area_xy())
        {
            return Err(Error::InvalidParameter(format!(
                "plane {} has {} voxels, expected {}",
                z,
                plane.len(),
                extent.area_xy()
            )));
        }
        Ok(Self { extent, planes })
    }

    /// Create a volume by evaluating `f(x, y, z)` for every voxel
    pub fn from_fn<F>(extent: Extent, mut f: F) -> Self
    where
        F: FnMut(u32, u32, u32) -> V,
    {
        let planes = (0..extent.depth())
            .map(|z| {
                let mut plane = Vec::with_capacity(extent.area_xy());
                for y in 0..extent.height() {
                    for x in 0..extent.width() {
                        plane.push(f(x, y, z));
                    }
                }
                plane
            })
            .collect();
        Self { extent, planes }
    }

    /// The size of the volume
    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Get a voxel value, or `None` if out of bounds
    pub fn get(&self, x: u32, y: u32, z: u32) -> Option<V> {
        if x < self.extent.width() && y < self.extent.height() && z < self.extent.depth() {
            Some(self.get_unchecked(x, y, z))
        } else {
            None
        }
    }

    /// Get a voxel value at a signed point, or `None` if out of bounds
    pub fn get_point(&self, point: Point3i) -> Option<V> {
        if self.extent.contains_point(point) {
            Some(self.get_unchecked(point.x as u32, point.y as u32, point.z as u32))
        } else {
            None
        }
    }

    /// Get a voxel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates lie outside the extent.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32, z: u32) -> V {
        self.planes[z as usize][self.extent.offset_xy(x, y)]
    }

    /// Set a voxel value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates lie outside
    /// the extent.
    pub fn set(&mut self, x: u32, y: u32, z: u32, value: V) -> Result<()> {
        if x < self.extent.width() && y < self.extent.height() && z < self.extent.depth() {
            self.set_unchecked(x, y, z, value);
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds {
                x: x as i64,
                y: y as i64,
                z: z as i64,
                extent: self.extent,
            })
        }
    }

    /// Set a voxel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates lie outside the extent.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, z: u32, value: V) {
        let offset = self.extent.offset_xy(x, y);
        self.planes[z as usize][offset] = value;
    }

    /// Borrow the buffer of plane `z`.
    ///
    /// # Panics
    ///
    /// Panics if `z >= depth`.
    #[inline]
    pub fn plane(&self, z: u32) -> &[V] {
        &self.planes[z as usize]
    }

    /// Mutably borrow the buffer of plane `z`.
    ///
    /// # Panics
    ///
    /// Panics if `z >= depth`.
    #[inline]
    pub fn plane_mut(&mut self, z: u32) -> &mut [V] {
        &mut self.planes[z as usize]
    }

    /// Iterate over the plane buffers in z order
    pub fn planes(&self) -> impl Iterator<Item = &[V]> {
        self.planes.iter().map(Vec::as_slice)
    }

    /// Iterate mutably over the plane buffers in z order
    pub fn planes_mut(&mut self) -> impl Iterator<Item = &mut [V]> {
        self.planes.iter_mut().map(Vec::as_mut_slice)
    }

    /// Iterate over every voxel value in raster order
    pub fn values(&self) -> impl Iterator<Item = V> + '_ {
        self.planes.iter().flat_map(|p| p.iter().copied())
    }

    /// Set every voxel to `value`
    pub fn fill(&mut self, value: V) {
        for plane in &mut self.planes {
            plane.fill(value);
        }
    }

    /// Largest voxel value
    pub fn max_value(&self) -> V {
        self.values().max().unwrap_or(V::ZERO)
    }

    /// Smallest voxel value
    pub fn min_value(&self) -> V {
        self.values().min().unwrap_or(V::ZERO)
    }

    /// Count voxels equal to `value`
    pub fn count_equal(&self, value: V) -> usize {
        self.values().filter(|&v| v == value).count()
    }

    /// Apply `f` to every voxel, producing a new volume
    pub fn map<W: Voxel, F: FnMut(V) -> W>(&self, mut f: F) -> Volume<W> {
        Volume {
            extent: self.extent,
            planes: self
                .planes
                .iter()
                .map(|p| p.iter().map(|&v| f(v)).collect())
                .collect(),
        }
    }

    /// Replace every voxel `v` with `V::MAX - v`
    pub fn invert_in_place(&mut self) {
        for plane in &mut self.planes {
            for v in plane.iter_mut() {
                *v = v.invert();
            }
        }
    }

    /// Replace every voxel with the maximum of itself and the matching
    /// voxel of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExtentMismatch`] if the extents differ.
    pub fn max_in_place(&mut self, other: &Volume<V>) -> Result<()> {
        self.check_same_extent(other)?;
        for (dst, src) in self.planes.iter_mut().zip(&other.planes) {
            for (d, &s) in dst.iter_mut().zip(src) {
                if s > *d {
                    *d = s;
                }
            }
        }
        Ok(())
    }

    /// Check that `other` has the same extent as `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExtentMismatch`] if the extents differ.
    pub fn check_same_extent<W: Voxel>(&self, other: &Volume<W>) -> Result<()> {
        if self.extent != other.extent {
            return Err(Error::ExtentMismatch {
                expected: self.extent,
                actual: other.extent,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let vol: Volume<u16> = Volume::new(Extent::new(3, 2, 2).unwrap());
        assert_eq!(vol.values().count(), 12);
        assert!(vol.values().all(|v| v == 0));
    }

    #[test]
    fn test_from_planes_validates() {
        let extent = Extent::new(2, 2, 2).unwrap();
        assert!(Volume::<u8>::from_planes(extent, vec![vec![0; 4]]).is_err());
        assert!(Volume::<u8>::from_planes(extent, vec![vec![0; 4], vec![0; 3]]).is_err());
        assert!(Volume::<u8>::from_planes(extent, vec![vec![0; 4], vec![0; 4]]).is_ok());
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut vol: Volume<u8> = Volume::new(Extent::new(2, 2, 1).unwrap());
        assert!(vol.set(2, 0, 0, 1).is_err());
        assert!(vol.set(0, 0, 1, 1).is_err());
    }

    #[test]
    fn test_from_fn_and_plane_layout() {
        let vol = Volume::from_fn(Extent::new(3, 2, 2).unwrap(), |x, y, z| {
            (x + 10 * y + 100 * z) as u32
        });
        assert_eq!(vol.plane(1)[4], 111);
        assert_eq!(vol.get_point(Point3i::new(2, 1, 1)), Some(112));
        assert_eq!(vol.get_point(Point3i::new(-1, 0, 0)), None);
    }

    #[test]
    fn test_max_in_place_and_invert() {
        let extent = Extent::new_2d(2, 1).unwrap();
        let mut a = Volume::from_planes(extent, vec![vec![1u8, 9]]).unwrap();
        let b = Volume::from_planes(extent, vec![vec![5u8, 2]]).unwrap();
        a.max_in_place(&b).unwrap();
        assert_eq!(a.plane(0), &[5, 9]);
        a.invert_in_place();
        assert_eq!(a.plane(0), &[250, 246]);
    }

    #[test]
    fn test_extent_mismatch() {
        let mut a: Volume<u8> = Volume::new(Extent::new_2d(2, 2).unwrap());
        let b: Volume<u8> = Volume::new(Extent::new_2d(3, 2).unwrap());
        assert!(matches!(
            a.max_in_place(&b),
            Err(Error::ExtentMismatch { .. })
        ));
    }
}
