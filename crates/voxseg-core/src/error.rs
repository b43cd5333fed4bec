//! Error types for voxseg-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use crate::extent::Extent;
use thiserror::Error;

/// voxseg core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid volume extent (every dimension must be at least 1)
    #[error("invalid extent: {width}x{height}x{depth}")]
    InvalidExtent { width: u32, height: u32, depth: u32 },

    /// Two volumes or masks were expected to share an extent
    #[error("extent mismatch: expected {expected}, got {actual}")]
    ExtentMismatch { expected: Extent, actual: Extent },

    /// Index out of bounds
    #[error("index out of bounds: ({x}, {y}, {z}) outside {extent}")]
    IndexOutOfBounds {
        x: i64,
        y: i64,
        z: i64,
        extent: Extent,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Physical voxel sizes must be finite and strictly positive
    #[error("invalid resolution: ({x}, {y}, {z})")]
    InvalidResolution { x: f64, y: f64, z: f64 },
}

/// Result type alias for voxseg core operations
pub type Result<T> = std::result::Result<T, Error>;
