//! Voxel value types
//!
//! [`Voxel`] abstracts over the unsigned integer types a volume may hold.
//! [`Intensity`] narrows it to types with a small enough range to index a
//! bucket per value, which the reconstruction algorithms require.

use std::fmt::Debug;

/// A scalar value stored in a [`Volume`](crate::Volume)
pub trait Voxel: Copy + Ord + Eq + Default + Debug + Send + Sync + 'static {
    /// The background value
    const ZERO: Self;
    /// The largest representable value
    const MAX: Self;

    /// Widen to `usize`
    fn to_usize(self) -> usize;

    /// Narrow from `usize`, saturating at [`Voxel::MAX`]
    fn from_usize(value: usize) -> Self;

    /// `MAX - self`
    fn invert(self) -> Self;
}

/// Voxel types whose full value range can be enumerated (8- and 16-bit)
pub trait Intensity: Voxel {}

macro_rules! impl_voxel {
    ($($t:ty),*) => {
        $(
            impl Voxel for $t {
                const ZERO: Self = 0;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn to_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_usize(value: usize) -> Self {
                    <$t>::try_from(value).unwrap_or(<$t>::MAX)
                }

                #[inline]
                fn invert(self) -> Self {
                    <$t>::MAX - self
                }
            }
        )*
    };
}

impl_voxel!(u8, u16, u32);

impl Intensity for u8 {}
impl Intensity for u16 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert() {
        assert_eq!(10u8.invert(), 245);
        assert_eq!(0u16.invert(), u16::MAX);
    }

    #[test]
    fn test_from_usize_saturates() {
        assert_eq!(u8::from_usize(300), 255);
        assert_eq!(u16::from_usize(300), 300);
    }
}
