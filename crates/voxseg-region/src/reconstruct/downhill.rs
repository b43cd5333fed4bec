//! Reconstruction by a single downhill flood
//!
//! Reconstruction by erosion is the dual of reconstruction by dilation:
//! invert both volumes against the type maximum, reconstruct by dilation and
//! invert the result back.
//!
//! Reconstruction by dilation floods from the marker. Every non-zero marker
//! voxel is queued at its value; the highest entry is popped and offers
//! `min(level, mask)` to each neighbor. A neighbor that improves takes the
//! offer, is finalized and is queued at its new value. Entries whose voxel
//! has since been raised are stale and skipped. Since levels only decrease,
//! each voxel is expanded once.

use super::{GrayscaleReconstruction, check_containing};
use crate::error::RegionResult;
use crate::queue::DownhillQueue;
use voxseg_core::{Intensity, ObjectMask, Volume};
use voxseg_morph::Neighborhood;

/// Priority-queue reconstruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DownhillReconstruction {
    /// Neighborhood the flood spreads through
    pub neighborhood: Neighborhood,
}

impl DownhillReconstruction {
    /// Create a reconstruction with the given neighborhood
    pub fn new(neighborhood: Neighborhood) -> Self {
        Self { neighborhood }
    }

    /// Reconstruct `mask` from `marker` by dilation, in place.
    ///
    /// The marker is first lowered to at most the mask. With a containing
    /// object only voxels inside it are lowered, seeded or flooded; all
    /// others keep their marker value.
    ///
    /// # Errors
    ///
    /// Returns an error on mismatched extents or a containing object lying
    /// entirely outside the volume.
    pub fn reconstruction_by_dilation<V: Intensity>(
        &self,
        mask: &Volume<V>,
        marker: &mut Volume<V>,
        containing: Option<&ObjectMask>,
    ) -> RegionResult<()> {
        mask.check_same_extent(marker)?;
        check_containing(mask, containing)?;

        let extent = mask.extent();
        let width = extent.width() as usize;
        let area = extent.area_xy();
        let inside = containing.map(|object| {
            let mut inside = vec![false; extent.volume()];
            for p in object.iter_points().filter(|&p| extent.contains_point(p)) {
                inside[p.z as usize * area + p.y as usize * width + p.x as usize] = true;
            }
            inside
        });
        let in_region = |index: usize| inside.as_ref().is_none_or(|inside| inside[index]);

        let mut queue = DownhillQueue::new(V::MAX.to_usize());
        for z in 0..extent.depth() {
            let mask_plane = mask.plane(z);
            let base = z as usize * area;
            for (offset, value) in marker.plane_mut(z).iter_mut().enumerate() {
                if !in_region(base + offset) {
                    continue;
                }
                *value = (*value).min(mask_plane[offset]);
                if *value != V::ZERO {
                    queue.push(value.to_usize(), base + offset);
                }
            }
        }
        let seeds = queue.len();

        let offsets = self.neighborhood.offsets(&extent);
        let mut finalized = vec![false; extent.volume()];
        let mut expanded = 0usize;

        while let Some((level, index)) = queue.pop() {
            let (z, offset) = (index / area, index % area);
            let (x, y) = (offset % width, offset / width);
            if marker.plane(z as u32)[offset].to_usize() != level {
                continue;
            }
            finalized[index] = true;
            expanded += 1;
            let level = V::from_usize(level);

            for d in &offsets {
                let (nx, ny, nz) = (x as i32 + d.x, y as i32 + d.y, z as i32 + d.z);
                if !extent.contains(nx, ny, nz) {
                    continue;
                }
                let n_offset = ny as usize * width + nx as usize;
                let n_index = nz as usize * area + n_offset;
                if finalized[n_index] || !in_region(n_index) {
                    continue;
                }
                let candidate = level.min(mask.plane(nz as u32)[n_offset]);
                let current = &mut marker.plane_mut(nz as u32)[n_offset];
                if candidate > *current {
                    *current = candidate;
                    finalized[n_index] = true;
                    queue.push(candidate.to_usize(), n_index);
                }
            }
        }

        tracing::debug!(seeds, expanded, extent = %extent, "downhill reconstruction finished");
        Ok(())
    }
}

impl GrayscaleReconstruction for DownhillReconstruction {
    fn reconstruction_by_erosion<V: Intensity>(
        &self,
        mask: &Volume<V>,
        marker: &Volume<V>,
        containing: Option<&ObjectMask>,
    ) -> RegionResult<Volume<V>> {
        mask.check_same_extent(marker)?;

        let mut mask_inv = mask.clone();
        mask_inv.invert_in_place();
        let mut result = marker.clone();
        result.invert_in_place();

        self.reconstruction_by_dilation(&mask_inv, &mut result, containing)?;
        result.invert_in_place();
        Ok(result)
    }
}
