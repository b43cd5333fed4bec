//! voxseg-region - Object extraction and grayscale reconstruction
//!
//! This crate provides:
//!
//! - Extraction of object masks from labeled volumes, and the reverse
//!   painting of objects into labels
//! - A bucket priority queue for downhill flooding
//! - Grayscale reconstruction by erosion, with an iterative and a
//!   priority-queue strategy
//! - Minima imposition built on reconstruction

mod error;
pub mod extract;
pub mod label;
pub mod minima;
pub mod queue;
pub mod reconstruct;

pub use error::{RegionError, RegionResult};
pub use extract::{ExtractOptions, LabelRange, accumulate_point_ranges, extract_objects};
pub use label::paint_labels;
pub use minima::impose_minima;
pub use queue::DownhillQueue;
pub use reconstruct::{
    DownhillReconstruction, GrayscaleReconstruction, IterativeErosionReconstruction,
    ReconstructionMethod,
};
