//! voxseg Core - Basic data structures for voxel segmentation
//!
//! This crate provides the fundamental data structures used throughout
//! the voxseg workspace:
//!
//! - [`Extent`] - The size of a volume
//! - [`Volume`] - Plane-major 3D voxel container, generic over [`Voxel`]
//! - [`Point3i`] / [`PointRange`] - Integer coordinates and their running bounds
//! - [`BoundingBox`] - Axis-aligned integer box
//! - [`ObjectMask`] / [`ObjectCollection`] - Segmented objects
//! - [`Resolution`] - Physical voxel size

pub mod bbox;
pub mod error;
pub mod extent;
pub mod object;
pub mod point;
pub mod resolution;
pub mod volume;
pub mod voxel;

pub use bbox::BoundingBox;
pub use error::{Error, Result};
pub use extent::Extent;
pub use object::{BinaryValues, ObjectCollection, ObjectMask};
pub use point::{Point3i, PointRange};
pub use resolution::Resolution;
pub use volume::Volume;
pub use voxel::{Intensity, Voxel};
