//! Physical voxel size
//!
//! Distances measured in voxels are converted to physical units (metres)
//! through a [`Resolution`].

use crate::error::{Error, Result};

/// Physical size of one voxel along each axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    x: f64,
    y: f64,
    z: f64,
}

impl Resolution {
    /// Create a resolution
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidResolution`] unless every size is finite and
    /// strictly positive.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !(valid(x) && valid(y) && valid(z)) {
            return Err(Error::InvalidResolution { x, y, z });
        }
        Ok(Self { x, y, z })
    }

    /// Size along x
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Size along y
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Size along z
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Euclidean length of a displacement given in voxels
    pub fn physical_distance(&self, dx: f64, dy: f64, dz: f64) -> f64 {
        let (px, py, pz) = (dx * self.x, dy * self.y, dz * self.z);
        (px * px + py * py + pz * pz).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_resolution() {
        assert!(Resolution::new(0.0, 1.0, 1.0).is_err());
        assert!(Resolution::new(1.0, f64::NAN, 1.0).is_err());
        assert!(Resolution::new(1.0, 1.0, -2.0).is_err());
    }

    #[test]
    fn test_physical_distance() {
        let res = Resolution::new(0.5, 0.5, 2.0).unwrap();
        assert!((res.physical_distance(6.0, 8.0, 0.0) - 5.0).abs() < 1e-12);
        assert!((res.physical_distance(0.0, 0.0, 1.0) - 2.0).abs() < 1e-12);
    }
}
