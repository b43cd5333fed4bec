//! voxseg - Voxel segmentation building blocks
//!
//! # Overview
//!
//! - Extraction of object masks from labeled 3D volumes
//! - Grayscale morphology (erosion, dilation) with 4/6- or 8/26-connected
//!   neighborhoods
//! - Grayscale reconstruction by erosion and minima imposition
//! - Greedy, priority-driven merging of neighboring objects
//!
//! # Example
//!
//! ```
//! use voxseg::{Extent, Volume};
//! use voxseg::region::{ExtractOptions, extract_objects};
//!
//! let extent = Extent::new(4, 4, 2).unwrap();
//! let labels = Volume::from_fn(extent, |x, _, _| if x < 2 { 1u32 } else { 2 });
//! let objects = extract_objects(&labels, &ExtractOptions::default()).unwrap();
//! assert_eq!(objects.len(), 2);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use voxseg_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use voxseg_merge as merge;
pub use voxseg_morph as morph;
pub use voxseg_region as region;
