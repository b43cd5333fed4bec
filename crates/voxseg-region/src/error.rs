//! Error types for voxseg-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] voxseg_core::Error),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] voxseg_morph::MorphError),

    /// A voxel carries a label outside the configured range
    #[error("label {label} outside range [{min}, {max}]")]
    LabelOutOfRange { label: usize, min: usize, max: usize },

    /// A precondition of the requested operation is violated
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An iterative algorithm hit its iteration cap before converging
    #[error("no convergence after {iterations} iterations")]
    NotConverged { iterations: usize },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
