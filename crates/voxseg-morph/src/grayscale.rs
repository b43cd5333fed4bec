//! Grayscale morphological operations
//!
//! Implements erosion and dilation over a [`Neighborhood`] for volumes of any
//! [`Voxel`] type.
//!
//! # Algorithm
//!
//! - **Erosion**: each output voxel is the minimum over the voxel itself and
//!   its neighbors
//! - **Dilation**: each output voxel is the maximum over the same set
//!
//! Neighbors outside the volume are skipped; there is no wraparound and no
//! synthetic border value. Results are always written to a separate
//! destination so that the scan order cannot influence them. Both functions
//! report whether any voxel changed, which makes them usable as the
//! convergence test of an iterative algorithm.

use crate::error::{MorphError, MorphResult};
use crate::neighborhood::Neighborhood;
use crate::sliding::SlidingBuffer;
use voxseg_core::{Point3i, Volume, Voxel};

/// Erode `src` into `dest`.
///
/// # Arguments
///
/// * `src` - Input volume
/// * `dest` - Output volume of the same extent (overwritten)
/// * `neighborhood` - Structuring neighborhood
///
/// # Returns
///
/// `true` if any voxel of `dest` differs from the matching voxel of `src`.
///
/// # Errors
///
/// Returns [`MorphError::ExtentMismatch`] if the extents differ.
pub fn erode_gray_into<V: Voxel>(
    src: &Volume<V>,
    dest: &mut Volume<V>,
    neighborhood: &Neighborhood,
) -> MorphResult<bool> {
    rank_extreme_into(src, dest, neighborhood, |a, b| a.min(b))
}

/// Dilate `src` into `dest`.
///
/// See [`erode_gray_into`]; the maximum replaces the minimum.
pub fn dilate_gray_into<V: Voxel>(
    src: &Volume<V>,
    dest: &mut Volume<V>,
    neighborhood: &Neighborhood,
) -> MorphResult<bool> {
    rank_extreme_into(src, dest, neighborhood, |a, b| a.max(b))
}

/// Erode a volume, returning a new volume
pub fn erode_gray<V: Voxel>(src: &Volume<V>, neighborhood: &Neighborhood) -> Volume<V> {
    let mut dest = Volume::new(src.extent());
    rank_extreme_scan(src, &mut dest, neighborhood, |a, b| a.min(b));
    dest
}

/// Dilate a volume, returning a new volume
pub fn dilate_gray<V: Voxel>(src: &Volume<V>, neighborhood: &Neighborhood) -> Volume<V> {
    let mut dest = Volume::new(src.extent());
    rank_extreme_scan(src, &mut dest, neighborhood, |a, b| a.max(b));
    dest
}

fn rank_extreme_into<V, F>(
    src: &Volume<V>,
    dest: &mut Volume<V>,
    neighborhood: &Neighborhood,
    pick: F,
) -> MorphResult<bool>
where
    V: Voxel,
    F: Fn(V, V) -> V,
{
    let extent = src.extent();
    if dest.extent() != extent {
        return Err(MorphError::ExtentMismatch {
            source_extent: extent,
            dest_extent: dest.extent(),
        });
    }
    Ok(rank_extreme_scan(src, dest, neighborhood, pick))
}

/// Raster scan of [`rank_extreme_into`]; `dest` must share the extent of `src`
fn rank_extreme_scan<V, F>(
    src: &Volume<V>,
    dest: &mut Volume<V>,
    neighborhood: &Neighborhood,
    pick: F,
) -> bool
where
    V: Voxel,
    F: Fn(V, V) -> V,
{
    let extent = src.extent();
    let offsets = neighborhood.offsets(&extent);
    let width = extent.width() as i32;
    let height = extent.height() as i32;

    let mut buffer = SlidingBuffer::new(src);
    let mut changed = false;

    for z in 0..extent.depth() {
        if z > 0 {
            buffer.shift();
        }
        let current = buffer.current();
        let out = dest.plane_mut(z);

        for y in 0..height {
            for x in 0..width {
                let index = (y * width + x) as usize;
                let own = current[index];
                let mut extreme = own;

                for &Point3i { x: dx, y: dy, z: dz } in &offsets {
                    let (nx, ny) = (x + dx, y + dy);
                    if nx < 0 || ny < 0 || nx >= width || ny >= height {
                        continue;
                    }
                    if let Some(v) = buffer.get((ny * width + nx) as usize, dz) {
                        extreme = pick(extreme, v);
                    }
                }

                if extreme != own {
                    changed = true;
                }
                out[index] = extreme;
            }
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighborhood::Connectivity;
    use voxseg_core::Extent;

    fn plane(values: &[u8], w: u32, h: u32) -> Volume<u8> {
        Volume::from_planes(Extent::new_2d(w, h).unwrap(), vec![values.to_vec()]).unwrap()
    }

    #[test]
    fn test_erode_small_2d() {
        #[rustfmt::skip]
        let vol = plane(&[
            9, 9, 9,
            9, 1, 9,
            9, 9, 9,
        ], 3, 3);
        let out = erode_gray(&vol, &Neighborhood::new(Connectivity::Small));
        #[rustfmt::skip]
        assert_eq!(out.plane(0), &[
            9, 1, 9,
            1, 1, 1,
            9, 1, 9,
        ]);
    }

    #[test]
    fn test_erode_big_2d() {
        #[rustfmt::skip]
        let vol = plane(&[
            9, 9, 9,
            9, 1, 9,
            9, 9, 9,
        ], 3, 3);
        let out = erode_gray(&vol, &Neighborhood::new(Connectivity::Big));
        assert!(out.values().all(|v| v == 1));
    }

    #[test]
    fn test_erode_3d_reaches_neighbor_planes() {
        let extent = Extent::new(3, 3, 3).unwrap();
        let vol = Volume::from_fn(extent, |x, y, z| if (x, y, z) == (1, 1, 1) { 0u8 } else { 50 });

        let small = erode_gray(&vol, &Neighborhood::new(Connectivity::Small));
        assert_eq!(small.get(1, 1, 0), Some(0));
        assert_eq!(small.get(0, 1, 0), Some(50));

        let big = erode_gray(&vol, &Neighborhood::new(Connectivity::Big));
        assert!(big.values().all(|v| v == 0));

        let flat = erode_gray(&vol, &Neighborhood::new(Connectivity::Big).with_3d(false));
        assert_eq!(flat.get(1, 1, 0), Some(50));
    }

    #[test]
    fn test_dilate() {
        let vol = plane(&[0, 0, 0, 0, 7], 5, 1);
        let out = dilate_gray(&vol, &Neighborhood::new(Connectivity::Small));
        assert_eq!(out.plane(0), &[0, 0, 0, 7, 7]);
    }

    #[test]
    fn test_allocating_matches_into() {
        let vol = plane(&[3, 8, 1, 6, 2, 9, 4, 7, 5], 3, 3);
        let nbh = Neighborhood::new(Connectivity::Small);

        let mut eroded = Volume::new(vol.extent());
        erode_gray_into(&vol, &mut eroded, &nbh).unwrap();
        assert_eq!(erode_gray(&vol, &nbh), eroded);

        let mut dilated = Volume::new(vol.extent());
        dilate_gray_into(&vol, &mut dilated, &nbh).unwrap();
        assert_eq!(dilate_gray(&vol, &nbh), dilated);
    }

    #[test]
    fn test_changed_flag() {
        let uniform = plane(&[4; 9], 3, 3);
        let mut dest = Volume::new(uniform.extent());
        let changed =
            erode_gray_into(&uniform, &mut dest, &Neighborhood::new(Connectivity::Big)).unwrap();
        assert!(!changed);
        assert_eq!(dest, uniform);
    }

    #[test]
    fn test_extent_mismatch() {
        let a = plane(&[1; 4], 2, 2);
        let mut b = plane(&[1; 6], 3, 2);
        assert!(erode_gray_into(&a, &mut b, &Neighborhood::default()).is_err());
    }
}
