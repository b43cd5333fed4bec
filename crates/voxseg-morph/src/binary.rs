//! Binary morphology on object masks
//!
//! Object masks are stored local to their bounding box, so dilation first
//! grows the box and then switches on every neighbor of every on voxel.

use crate::error::{MorphError, MorphResult};
use crate::neighborhood::Neighborhood;
use voxseg_core::{Extent, ObjectMask};

/// Dilate an object mask by one voxel.
///
/// # Arguments
///
/// * `object` - Input mask
/// * `neighborhood` - Structuring neighborhood; its dimensionality is
///   resolved against `clip` when given, otherwise against the object's box
/// * `clip` - Optional volume extent the result must stay inside
///
/// # Errors
///
/// Returns [`MorphError::InvalidParameters`] if the object lies entirely
/// outside `clip`.
pub fn dilate_object(
    object: &ObjectMask,
    neighborhood: &Neighborhood,
    clip: Option<&Extent>,
) -> MorphResult<ObjectMask> {
    let reference = clip.copied().unwrap_or_else(|| object.bounding_box().extent());
    let do_3d = neighborhood.is_3d(&reference);
    let offsets = neighborhood.offsets(&reference);

    let grown = object.bounding_box().grow(1, do_3d, clip)?;
    let mut out = ObjectMask::new_empty(grown);

    for p in object.iter_points() {
        if grown.contains(p) {
            out.set_on(p)?;
        }
        for &offset in &offsets {
            let q = p + offset;
            if grown.contains(q) {
                out.set_on(q)?;
            }
        }
    }

    if out.is_empty() {
        return Err(MorphError::InvalidParameters(
            "dilated object has no voxels inside the clip extent".to_string(),
        ));
    }
    Ok(out)
}
