//! voxseg-merge - Greedy merging of neighboring objects
//!
//! This crate provides:
//!
//! - Vertices (objects with a payload) and prioritized edges
//! - Before- and after-conditions deciding which pairs may merge
//! - Priority assignment and payload functions
//! - The [`NeighborGraph`] with incremental merge updates
//! - The [`MergeEngine`] driving merges until no eligible edge remains
//!
//! Conditions, priorities and payloads are traits implemented both by the
//! structs of this crate and by closures.

pub mod conditions;
pub mod edge;
pub mod engine;
mod error;
pub mod graph;
pub mod priority;
pub mod vertex;

pub use conditions::{
    AfterCondition, AlwaysAccept, BeforeCondition, BoundingBoxProximity, DistanceThreshold,
    MaxVoxelCount, Touching,
};
pub use edge::{EdgeId, EdgePriority, PrioritizedEdge};
pub use engine::{MergeEngine, MergeEngineBuilder, MergeReport, MergeRules};
pub use error::{MergeError, MergeResult};
pub use graph::NeighborGraph;
pub use priority::{AssignPriority, PayloadFn, PayloadIncrease, PayloadRatio, VoxelCountPayload};
pub use vertex::{ObjectVertex, VertexId};
