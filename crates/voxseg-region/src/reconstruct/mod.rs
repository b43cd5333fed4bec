//! Grayscale morphological reconstruction
//!
//! Reconstruction by erosion of a `mask` from a `marker` is the infimum
//! reachable by repeatedly eroding the marker while never dropping below the
//! mask. It is the core of minima imposition before a watershed: regional
//! minima not marked in the marker are filled.
//!
//! Two interchangeable strategies implement [`GrayscaleReconstruction`]:
//!
//! - [`IterativeErosionReconstruction`] - erode, take the maximum with the
//!   mask, repeat until stable
//! - [`DownhillReconstruction`] - invert, flood once from the seeds through a
//!   [`DownhillQueue`](crate::DownhillQueue), invert back
//!
//! Both first raise the marker to at least the mask, the precondition of
//! reconstruction by erosion, so they agree voxel for voxel on any input.

mod downhill;
mod erosion;

pub use downhill::DownhillReconstruction;
pub use erosion::IterativeErosionReconstruction;

use crate::error::{RegionError, RegionResult};
use voxseg_core::{Intensity, ObjectMask, Volume};
use voxseg_morph::Neighborhood;

/// A strategy computing grayscale reconstruction by erosion
pub trait GrayscaleReconstruction {
    /// Reconstruct `mask` from `marker` by erosion.
    ///
    /// # Arguments
    ///
    /// * `mask` - Lower bound of the result
    /// * `marker` - Starting volume; raised to the mask where below it
    /// * `containing` - Optional object restricting the voxels that may
    ///   change; voxels outside keep their marker value
    ///
    /// # Returns
    ///
    /// A new volume of the same extent.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::Core`] on mismatched extents and
    /// [`RegionError::Configuration`] when the strategy cannot honor
    /// `containing`.
    fn reconstruction_by_erosion<V: Intensity>(
        &self,
        mask: &Volume<V>,
        marker: &Volume<V>,
        containing: Option<&ObjectMask>,
    ) -> RegionResult<Volume<V>>;
}

/// Selects one of the reconstruction strategies at run time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconstructionMethod {
    /// Fixpoint iteration of erosion and maximum
    IterativeErosion(IterativeErosionReconstruction),
    /// Single-pass priority-queue flood
    Downhill(DownhillReconstruction),
}

impl Default for ReconstructionMethod {
    fn default() -> Self {
        Self::Downhill(DownhillReconstruction::default())
    }
}

impl ReconstructionMethod {
    /// The iterative strategy with the given neighborhood
    pub fn iterative(neighborhood: Neighborhood) -> Self {
        Self::IterativeErosion(IterativeErosionReconstruction::new(neighborhood))
    }

    /// The downhill strategy with the given neighborhood
    pub fn downhill(neighborhood: Neighborhood) -> Self {
        Self::Downhill(DownhillReconstruction::new(neighborhood))
    }
}

impl GrayscaleReconstruction for ReconstructionMethod {
    fn reconstruction_by_erosion<V: Intensity>(
        &self,
        mask: &Volume<V>,
        marker: &Volume<V>,
        containing: Option<&ObjectMask>,
    ) -> RegionResult<Volume<V>> {
        match self {
            Self::IterativeErosion(r) => r.reconstruction_by_erosion(mask, marker, containing),
            Self::Downhill(r) => r.reconstruction_by_erosion(mask, marker, containing),
        }
    }
}

/// Check that a containing object overlaps the volume extent
fn check_containing<V: Intensity>(
    volume: &Volume<V>,
    containing: Option<&ObjectMask>,
) -> RegionResult<()> {
    let Some(object) = containing else {
        return Ok(());
    };
    if object.bounding_box().clip_to(&volume.extent()).is_none() {
        return Err(RegionError::Configuration(format!(
            "containing object at {:?} lies outside the volume {}",
            object.bounding_box().corner(),
            volume.extent()
        )));
    }
    Ok(())
}
