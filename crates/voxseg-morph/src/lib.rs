//! voxseg-morph - Morphological operations for voxel volumes
//!
//! This crate provides:
//!
//! - Structuring neighborhoods (4/6-connected or 8/26-connected)
//! - A sliding window over adjacent planes for raster scans
//! - Grayscale erosion and dilation with change detection
//! - Binary dilation of object masks

pub mod binary;
mod error;
pub mod grayscale;
pub mod neighborhood;
pub mod sliding;

pub use error::{MorphError, MorphResult};
pub use neighborhood::{Connectivity, Neighborhood};
pub use sliding::SlidingBuffer;

pub use binary::dilate_object;
pub use grayscale::{dilate_gray, dilate_gray_into, erode_gray, erode_gray_into};
