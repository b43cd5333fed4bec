//! Error types for voxseg-morph

use thiserror::Error;
use voxseg_core::Extent;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] voxseg_core::Error),

    /// Source and destination volumes differ in size
    #[error("extent mismatch: source {source_extent}, destination {dest_extent}")]
    ExtentMismatch {
        source_extent: Extent,
        dest_extent: Extent,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
