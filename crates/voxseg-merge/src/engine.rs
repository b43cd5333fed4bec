//! Greedy merge engine
//!
//! The engine owns the [`MergeRules`] (conditions, priority and payload
//! functions, optional resolution). Each run builds a [`NeighborGraph`] over
//! the input objects and repeatedly merges the highest-priority eligible
//! edge until none is left. Every merge removes one vertex, so a run over
//! N objects performs at most N - 1 merges.
//!
//! # Examples
//!
//! ```
//! use voxseg_core::{ObjectCollection, ObjectMask, Point3i};
//! use voxseg_merge::{MergeEngineBuilder, PayloadRatio, Touching, VoxelCountPayload};
//!
//! let objects: ObjectCollection = (0..3)
//!     .map(|x| ObjectMask::from_points([Point3i::new(x, 0, 0)]).unwrap())
//!     .collect();
//!
//! let engine = MergeEngineBuilder::new()
//!     .with_before_condition(Touching::default())
//!     .with_priority(PayloadRatio)
//!     .with_payload(VoxelCountPayload)
//!     .build()
//!     .unwrap();
//!
//! let merged = engine.merge_objects(objects).unwrap();
//! assert_eq!(merged.len(), 1);
//! ```

use crate::conditions::{AfterCondition, AlwaysAccept, BeforeCondition};
use crate::edge::EdgePriority;
use crate::error::{MergeError, MergeResult};
use crate::graph::NeighborGraph;
use crate::priority::{AssignPriority, PayloadFn};
use crate::vertex::ObjectVertex;
use std::time::{Duration, Instant};
use voxseg_core::{ObjectCollection, ObjectMask, Resolution};

/// The collaborators a merge run consults
pub struct MergeRules {
    pub(crate) before: Box<dyn BeforeCondition>,
    pub(crate) after: Option<Box<dyn AfterCondition>>,
    pub(crate) priority: Box<dyn AssignPriority>,
    pub(crate) payload: Box<dyn PayloadFn>,
    pub(crate) resolution: Option<Resolution>,
}

impl MergeRules {
    /// Physical voxel size passed to the conditions and the priority
    pub fn resolution(&self) -> Option<&Resolution> {
        self.resolution.as_ref()
    }
}

/// Builder for a [`MergeEngine`]
///
/// The priority and payload functions are required; the before-condition
/// defaults to [`AlwaysAccept`] and the after-condition to none.
#[derive(Default)]
pub struct MergeEngineBuilder {
    before: Option<Box<dyn BeforeCondition>>,
    after: Option<Box<dyn AfterCondition>>,
    priority: Option<Box<dyn AssignPriority>>,
    payload: Option<Box<dyn PayloadFn>>,
    resolution: Option<Resolution>,
}

impl MergeEngineBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the condition deciding which pairs become edges
    pub fn with_before_condition(mut self, condition: impl BeforeCondition + 'static) -> Self {
        self.before = Some(Box::new(condition));
        self
    }

    /// Set the before-condition from a closure
    pub fn with_before_fn<F>(self, f: F) -> Self
    where
        F: Fn(&ObjectVertex, &ObjectVertex, Option<&Resolution>) -> MergeResult<bool>
            + Send
            + Sync
            + 'static,
    {
        self.with_before_condition(f)
    }

    /// Set the condition checked on the merged vertex
    pub fn with_after_condition(mut self, condition: impl AfterCondition + 'static) -> Self {
        self.after = Some(Box::new(condition));
        self
    }

    /// Set the after-condition from a closure
    pub fn with_after_fn<F>(self, f: F) -> Self
    where
        F: Fn(&ObjectVertex, &ObjectVertex, &ObjectVertex, Option<&Resolution>) -> MergeResult<bool>
            + Send
            + Sync
            + 'static,
    {
        self.with_after_condition(f)
    }

    /// Set the priority assignment
    pub fn with_priority(mut self, priority: impl AssignPriority + 'static) -> Self {
        self.priority = Some(Box::new(priority));
        self
    }

    /// Set the priority assignment from a closure
    pub fn with_priority_fn<F>(self, f: F) -> Self
    where
        F: Fn(
                &ObjectVertex,
                &ObjectVertex,
                &ObjectVertex,
                Option<&Resolution>,
            ) -> MergeResult<EdgePriority>
            + Send
            + Sync
            + 'static,
    {
        self.with_priority(f)
    }

    /// Set the payload function
    pub fn with_payload(mut self, payload: impl PayloadFn + 'static) -> Self {
        self.payload = Some(Box::new(payload));
        self
    }

    /// Set the payload function from a closure
    pub fn with_payload_fn<F>(self, f: F) -> Self
    where
        F: Fn(&ObjectMask) -> MergeResult<f64> + Send + Sync + 'static,
    {
        self.with_payload(f)
    }

    /// Set the physical voxel size
    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = Some(resolution);
        self
    }

    /// Build the engine
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Configuration`] if the priority or payload
    /// function is missing.
    pub fn build(self) -> MergeResult<MergeEngine> {
        let priority = self
            .priority
            .ok_or_else(|| MergeError::Configuration("no priority assignment set".into()))?;
        let payload = self
            .payload
            .ok_or_else(|| MergeError::Configuration("no payload function set".into()))?;
        Ok(MergeEngine {
            rules: MergeRules {
                before: self.before.unwrap_or_else(|| Box::new(AlwaysAccept)),
                after: self.after,
                priority,
                payload,
                resolution: self.resolution,
            },
        })
    }
}

/// Summary of a merge run
#[derive(Debug, Clone, PartialEq)]
pub struct MergeReport {
    /// Objects in the input
    pub initial_objects: usize,
    /// Objects in the output
    pub final_objects: usize,
    /// Merges performed
    pub merges: usize,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

/// Greedy priority-driven merging of neighboring objects
pub struct MergeEngine {
    rules: MergeRules,
}

impl MergeEngine {
    /// The rules this engine applies
    pub fn rules(&self) -> &MergeRules {
        &self.rules
    }

    /// Consume the engine, returning its rules
    pub fn into_rules(self) -> MergeRules {
        self.rules
    }

    /// Build the initial graph over a collection.
    ///
    /// Objects are added in collection order; each is tested against every
    /// earlier one. The returned graph may be driven by hand through
    /// [`NeighborGraph::find_max_priority`] and [`NeighborGraph::merge`].
    ///
    /// # Errors
    ///
    /// Propagates the first failure of the rules.
    pub fn graph(&self, objects: ObjectCollection) -> MergeResult<NeighborGraph<'_>> {
        let mut graph = NeighborGraph::new(&self.rules);
        for object in objects {
            graph.add_object(object)?;
        }
        Ok(graph)
    }

    /// Merge a collection until no eligible edge remains.
    ///
    /// # Returns
    ///
    /// The surviving objects: untouched inputs in their original order,
    /// followed by merged objects in the order they were created.
    ///
    /// # Errors
    ///
    /// Propagates the first failure of the rules; no partial result is
    /// returned.
    pub fn merge_objects(&self, objects: ObjectCollection) -> MergeResult<ObjectCollection> {
        self.merge_with_report(objects).map(|(objects, _)| objects)
    }

    /// Like [`MergeEngine::merge_objects`], also returning a [`MergeReport`]
    pub fn merge_with_report(
        &self,
        objects: ObjectCollection,
    ) -> MergeResult<(ObjectCollection, MergeReport)> {
        let start = Instant::now();
        let initial_objects = objects.len();

        let mut graph = self.graph(objects)?;
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            eligible = graph.eligible_edge_count(),
            "merge graph built"
        );

        let mut merges = 0usize;
        while let Some(edge) = graph.find_max_priority() {
            graph.merge(edge)?;
            merges += 1;
        }

        let merged = graph.into_objects();
        let report = MergeReport {
            initial_objects,
            final_objects: merged.len(),
            merges,
            elapsed: start.elapsed(),
        };
        tracing::debug!(
            initial = report.initial_objects,
            remaining = report.final_objects,
            merges,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "merge run finished"
        );
        Ok((merged, report))
    }
}
