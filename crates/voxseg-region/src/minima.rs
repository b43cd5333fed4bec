//! Minima imposition
//!
//! Before a watershed, every regional minimum not covered by a chosen set of
//! seed objects has to be filled so that each basin grows from exactly one
//! seed. The classic recipe:
//!
//! 1. Marker: the type minimum on seed voxels, the type maximum elsewhere
//! 2. Mask: `min(intensity + 1, marker)`, so seeds sit strictly below their
//!    surroundings
//! 3. Reconstruct the mask from the marker by erosion
//!
//! The result has regional minima exactly at the seeds. Intensities at the
//! type maximum cannot be raised by one and stay as they are.

use crate::error::RegionResult;
use crate::reconstruct::{GrayscaleReconstruction, ReconstructionMethod};
use voxseg_core::{Intensity, ObjectCollection, ObjectMask, Volume};

/// Impose the given minima on an intensity volume.
///
/// # Arguments
///
/// * `intensity` - Input volume
/// * `minima` - Objects becoming the only regional minima; voxels outside
///   the volume are ignored
/// * `containing` - Optional object restricting the voxels that may change
/// * `method` - Reconstruction strategy
///
/// # Returns
///
/// A new volume whose regional minima are the `minima` objects, each at
/// zero.
///
/// # Errors
///
/// Propagates reconstruction errors, including the refusal of
/// [`ReconstructionMethod::IterativeErosion`] to honor `containing`.
pub fn impose_minima<V: Intensity>(
    intensity: &Volume<V>,
    minima: &ObjectCollection,
    containing: Option<&ObjectMask>,
    method: &ReconstructionMethod,
) -> RegionResult<Volume<V>> {
    let extent = intensity.extent();

    let mut marker = Volume::new_filled(extent, V::MAX);
    let mut seeded = 0usize;
    for object in minima {
        for p in object.iter_points().filter(|&p| extent.contains_point(p)) {
            marker.set_unchecked(p.x as u32, p.y as u32, p.z as u32, V::ZERO);
            seeded += 1;
        }
    }

    let mut mask = intensity.map(|v| V::from_usize(v.to_usize() + 1));
    for (mask_plane, marker_plane) in mask.planes_mut().zip(marker.planes()) {
        for (m, &k) in mask_plane.iter_mut().zip(marker_plane) {
            *m = (*m).min(k);
        }
    }

    tracing::debug!(objects = minima.len(), seeded, "imposing minima");
    let mut result = method.reconstruction_by_erosion(&mask, &marker, containing)?;

    // Outside the containing object the input passes through
    if let Some(object) = containing {
        for p in extent.iter_points().filter(|&p| !object.contains(p)) {
            let (x, y, z) = (p.x as u32, p.y as u32, p.z as u32);
            result.set_unchecked(x, y, z, intensity.get_unchecked(x, y, z));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconstruct::DownhillReconstruction;
    use voxseg_core::{Extent, Point3i};
    use voxseg_morph::{Connectivity, Neighborhood};

    /// Two pits along a row: `[9, 2, 9, 4, 9]`
    fn two_pits() -> Volume<u8> {
        Volume::from_planes(Extent::new_2d(5, 1).unwrap(), vec![vec![9, 2, 9, 4, 9]]).unwrap()
    }

    fn single_seed(x: i32) -> ObjectCollection {
        ObjectCollection::from(vec![ObjectMask::from_points([Point3i::new(x, 0, 0)]).unwrap()])
    }

    #[test]
    fn test_unmarked_pit_is_filled() {
        let seeds = single_seed(1);
        let method = ReconstructionMethod::downhill(Neighborhood::new(Connectivity::Small));
        let result = impose_minima(&two_pits(), &seeds, None, &method).unwrap();

        assert_eq!(result.plane(0), &[10, 0, 10, 10, 10]);
    }

    #[test]
    fn test_strategies_agree() {
        let seeds = single_seed(3);
        let iterative = ReconstructionMethod::iterative(Neighborhood::default());
        let a = impose_minima(&two_pits(), &seeds, None, &iterative).unwrap();
        let b = impose_minima(&two_pits(), &seeds, None, &ReconstructionMethod::default()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.plane(0), &[10, 10, 10, 0, 10]);
    }

    #[test]
    fn test_containing_object_passes_outside_through() {
        let seeds = single_seed(1);
        let region = ObjectMask::from_points((0..3).map(|x| Point3i::new(x, 0, 0))).unwrap();
        let method = ReconstructionMethod::Downhill(DownhillReconstruction::default());
        let result = impose_minima(&two_pits(), &seeds, Some(&region), &method).unwrap();

        assert_eq!(result.plane(0), &[10, 0, 10, 4, 9]);
    }
}
