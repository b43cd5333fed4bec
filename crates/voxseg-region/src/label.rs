//! Label painting
//!
//! The inverse of extraction: write an object collection back into a
//! labeled volume.

use crate::error::{RegionError, RegionResult};
use voxseg_core::{Extent, ObjectCollection, Volume};

/// Paint every object of a collection into a new labeled volume.
///
/// Object `i` is written with label `i + 1`; where objects overlap, later
/// objects overwrite earlier ones. Voxels outside `extent` are ignored.
///
/// # Errors
///
/// Returns [`RegionError::Configuration`] if the collection holds more
/// objects than a `u32` label can number.
pub fn paint_labels(objects: &ObjectCollection, extent: Extent) -> RegionResult<Volume<u32>> {
    if objects.len() >= u32::MAX as usize {
        return Err(RegionError::Configuration(format!(
            "too many objects to label: {}",
            objects.len()
        )));
    }

    let mut vol = Volume::new(extent);
    for (i, object) in objects.iter().enumerate() {
        let label = i as u32 + 1;
        for p in object.iter_points().filter(|&p| extent.contains_point(p)) {
            vol.set_unchecked(p.x as u32, p.y as u32, p.z as u32, label);
        }
    }
    Ok(vol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxseg_core::{ObjectMask, Point3i};

    #[test]
    fn test_paint_overlap_and_clip() {
        let a = ObjectMask::from_points([Point3i::new(0, 0, 0), Point3i::new(1, 0, 0)]).unwrap();
        let b = ObjectMask::from_points([Point3i::new(1, 0, 0), Point3i::new(5, 0, 0)]).unwrap();
        let objects = ObjectCollection::from(vec![a, b]);

        let vol = paint_labels(&objects, Extent::new_2d(3, 1).unwrap()).unwrap();
        assert_eq!(vol.plane(0), &[1, 2, 0]);
    }
}
