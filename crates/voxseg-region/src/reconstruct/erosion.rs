//! Reconstruction by iterated erosion
//!
//! Starting from `max(marker, mask)`, repeatedly erode and take the
//! pointwise maximum with the mask until the volume stops changing. Each pass
//! costs one full erosion, so the number of passes grows with the longest
//! geodesic path the result has to travel.

use super::GrayscaleReconstruction;
use crate::error::{RegionError, RegionResult};
use voxseg_core::{Intensity, ObjectMask, Volume};
use voxseg_morph::{Neighborhood, erode_gray_into};

/// Fixpoint reconstruction by erosion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IterativeErosionReconstruction {
    /// Structuring neighborhood of each erosion pass
    pub neighborhood: Neighborhood,
    /// Abort with [`RegionError::NotConverged`] after this many passes
    pub max_iterations: Option<usize>,
}

impl IterativeErosionReconstruction {
    /// Create an unbounded reconstruction with the given neighborhood
    pub fn new(neighborhood: Neighborhood) -> Self {
        Self {
            neighborhood,
            max_iterations: None,
        }
    }

    /// Cap the number of erosion passes
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }
}

impl GrayscaleReconstruction for IterativeErosionReconstruction {
    /// # Errors
    ///
    /// A containing object is not supported and yields
    /// [`RegionError::Configuration`]. Exceeding `max_iterations` yields
    /// [`RegionError::NotConverged`].
    fn reconstruction_by_erosion<V: Intensity>(
        &self,
        mask: &Volume<V>,
        marker: &Volume<V>,
        containing: Option<&ObjectMask>,
    ) -> RegionResult<Volume<V>> {
        if containing.is_some() {
            return Err(RegionError::Configuration(
                "iterative erosion reconstruction does not support a containing object".into(),
            ));
        }
        mask.check_same_extent(marker)?;

        let mut current = marker.clone();
        current.max_in_place(mask)?;
        let mut scratch = Volume::new(mask.extent());

        let mut iterations = 0usize;
        loop {
            iterations += 1;
            erode_gray_into(&current, &mut scratch, &self.neighborhood)?;
            scratch.max_in_place(mask)?;
            if scratch == current {
                break;
            }
            std::mem::swap(&mut current, &mut scratch);

            if let Some(cap) = self.max_iterations {
                if iterations >= cap {
                    return Err(RegionError::NotConverged { iterations });
                }
            }
        }

        tracing::debug!(
            iterations,
            extent = %mask.extent(),
            "iterative erosion reconstruction converged"
        );
        Ok(current)
    }
}
