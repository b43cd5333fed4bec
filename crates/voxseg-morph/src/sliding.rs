//! Sliding neighborhood buffer
//!
//! Exposes the planes z-1, z and z+1 of a volume during a raster scan so that
//! neighbor lookups across planes cost a slice index. Advancing the window
//! with [`SlidingBuffer::shift`] only rebinds plane slices; nothing is
//! copied.

use crate::error::{MorphError, MorphResult};
use voxseg_core::{Extent, Volume, Voxel};

/// A window of up to three adjacent planes of a volume
///
/// At the first and last plane of the volume the missing neighbor plane is
/// reported as `None`.
#[derive(Debug)]
pub struct SlidingBuffer<'a, V: Voxel> {
    volume: &'a Volume<V>,
    z: u32,
    prev: Option<&'a [V]>,
    current: &'a [V],
    next: Option<&'a [V]>,
}

impl<'a, V: Voxel> SlidingBuffer<'a, V> {
    /// Create a buffer centered on plane 0
    pub fn new(volume: &'a Volume<V>) -> Self {
        let next = (volume.extent().depth() > 1).then(|| volume.plane(1));
        Self {
            volume,
            z: 0,
            prev: None,
            current: volume.plane(0),
            next,
        }
    }

    /// Re-center the buffer on plane `z`.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidParameters`] if `z` is not a plane of
    /// the volume.
    pub fn seek(&mut self, z: u32) -> MorphResult<()> {
        let volume = self.volume;
        let depth = volume.extent().depth();
        if z >= depth {
            return Err(MorphError::InvalidParameters(format!(
                "plane {} outside volume depth {}",
                z, depth
            )));
        }
        self.z = z;
        self.prev = z.checked_sub(1).map(|pz| volume.plane(pz));
        self.current = volume.plane(z);
        self.next = (z + 1 < depth).then(|| volume.plane(z + 1));
        Ok(())
    }

    /// Advance the window by one plane.
    ///
    /// Returns `false` (leaving the window unchanged) when already at the
    /// last plane.
    pub fn shift(&mut self) -> bool {
        let Some(next) = self.next else {
            return false;
        };
        self.z += 1;
        self.prev = Some(self.current);
        self.current = next;
        let volume = self.volume;
        let nz = self.z + 1;
        self.next = (nz < volume.extent().depth()).then(|| volume.plane(nz));
        true
    }

    /// Index of the central plane
    #[inline]
    pub fn z(&self) -> u32 {
        self.z
    }

    /// Extent of the underlying volume
    #[inline]
    pub fn extent(&self) -> Extent {
        self.volume.extent()
    }

    /// The central plane
    #[inline]
    pub fn current(&self) -> &'a [V] {
        self.current
    }

    /// Plane at relative offset `dz` (-1, 0 or 1); `None` if absent.
    #[inline]
    pub fn plane(&self, dz: i32) -> Option<&'a [V]> {
        match dz {
            -1 => self.prev,
            0 => Some(self.current),
            1 => self.next,
            _ => None,
        }
    }

    /// Voxel at in-plane offset `offset_xy` of the plane at relative `dz`
    #[inline]
    pub fn get(&self, offset_xy: usize, dz: i32) -> Option<V> {
        self.plane(dz).and_then(|p| p.get(offset_xy).copied())
    }
}
