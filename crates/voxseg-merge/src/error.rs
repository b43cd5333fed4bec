//! Error types for voxseg-merge

use crate::edge::EdgeId;
use crate::vertex::VertexId;
use thiserror::Error;

/// Errors that can occur while building or running a merge
#[derive(Debug, Error)]
pub enum MergeError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] voxseg_core::Error),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] voxseg_morph::MorphError),

    /// The engine is missing a collaborator or is otherwise misconfigured
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A condition, priority or payload function failed
    #[error("operation failed: {0}")]
    OperationFailed(String),

    /// The edge id does not name a live edge
    #[error("edge {0} is not in the graph")]
    InvalidEdge(EdgeId),

    /// The vertex id does not name a live vertex
    #[error("vertex {0} is not in the graph")]
    InvalidVertex(VertexId),
}

/// Result type for merge operations
pub type MergeResult<T> = Result<T, MergeError>;
