//! voxseg-test - Regression test framework for voxseg
//!
//! Provides [`RegParams`], an indexed comparison tracker, together with
//! helpers that build small synthetic volumes for tests.
//!
//! # Usage
//!
//! ```ignore
//! use voxseg_test::RegParams;
//!
//! let mut rp = RegParams::new("extract");
//! rp.compare_values(2.0, objects.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter for the tracing output installed by [`init_tracing`]

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;
use voxseg_core::{Extent, Point3i, Volume, Voxel};

/// Install a tracing subscriber writing to the test output.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Build a single-plane volume from rows of values
///
/// # Errors
///
/// Returns [`TestError::InvalidFixture`] if `rows` is empty or ragged.
pub fn volume_from_rows<V: Voxel>(rows: &[&[V]]) -> TestResult<Volume<V>> {
    volume_from_planes(&[rows])
}

/// Build a volume from planes of rows of values
///
/// # Errors
///
/// Returns [`TestError::InvalidFixture`] if the planes are empty or ragged.
pub fn volume_from_planes<V: Voxel>(planes: &[&[&[V]]]) -> TestResult<Volume<V>> {
    let height = planes.first().map(|p| p.len()).unwrap_or(0);
    let width = planes
        .first()
        .and_then(|p| p.first())
        .map(|r| r.len())
        .unwrap_or(0);
    if width == 0 || height == 0 {
        return Err(TestError::InvalidFixture("empty planes".to_string()));
    }
    let ragged = planes
        .iter()
        .any(|p| p.len() != height || p.iter().any(|r| r.len() != width));
    if ragged {
        return Err(TestError::InvalidFixture("ragged planes".to_string()));
    }

    let extent = Extent::new(width as u32, height as u32, planes.len() as u32)?;
    let data = planes
        .iter()
        .map(|p| p.iter().flat_map(|r| r.iter().copied()).collect())
        .collect();
    Ok(Volume::from_planes(extent, data)?)
}

/// Build a volume of uniformly random values in `0..=max` from a fixed seed
pub fn random_volume<V: Voxel>(extent: Extent, max: V, seed: u64) -> Volume<V> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max = max.to_usize();
    Volume::from_fn(extent, |_, _, _| V::from_usize(rng.random_range(0..=max)))
}

/// Paint inclusive boxes `(label, min, max)` into a zeroed `u32` volume
pub fn labeled_boxes(extent: Extent, boxes: &[(u32, Point3i, Point3i)]) -> Volume<u32> {
    let mut vol = Volume::new(extent);
    for &(label, min, max) in boxes {
        for z in min.z..=max.z {
            for y in min.y..=max.y {
                for x in min.x..=max.x {
                    let _ = vol.set(x as u32, y as u32, z as u32, label);
                }
            }
        }
    }
    vol
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_from_rows() {
        let vol = volume_from_rows::<u8>(&[&[1, 2, 3], &[4, 5, 6]]).unwrap();
        assert_eq!(vol.extent(), Extent::new(3, 2, 1).unwrap());
        assert_eq!(vol.get(2, 1, 0), Some(6));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(volume_from_rows::<u8>(&[&[1, 2], &[3]]).is_err());
        assert!(volume_from_rows::<u8>(&[]).is_err());
    }

    #[test]
    fn test_random_volume_is_reproducible() {
        let extent = Extent::new(4, 4, 2).unwrap();
        let a = random_volume::<u8>(extent, 20, 7);
        let b = random_volume::<u8>(extent, 20, 7);
        assert_eq!(a, b);
        assert!(a.values().all(|v| v <= 20));
    }

    #[test]
    fn test_labeled_boxes() {
        let extent = Extent::new(5, 5, 1).unwrap();
        let vol = labeled_boxes(
            extent,
            &[(1, Point3i::new(0, 0, 0), Point3i::new(2, 2, 0))],
        );
        assert_eq!(vol.count_equal(1), 9);
    }
}
