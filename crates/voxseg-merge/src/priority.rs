//! Payloads and merge priorities
//!
//! A [`PayloadFn`] scores a single object (for example its size or a
//! feature value). An [`AssignPriority`] turns the payloads of two vertices
//! and their merged vertex into the [`EdgePriority`] of the edge between
//! them.

use crate::edge::EdgePriority;
use crate::error::MergeResult;
use crate::vertex::ObjectVertex;
use voxseg_core::{ObjectMask, Resolution};

/// Computes the payload of an object
pub trait PayloadFn: Send + Sync {
    /// Score `object`
    fn payload(&self, object: &ObjectMask) -> MergeResult<f64>;
}

impl<F> PayloadFn for F
where
    F: Fn(&ObjectMask) -> MergeResult<f64> + Send + Sync,
{
    fn payload(&self, object: &ObjectMask) -> MergeResult<f64> {
        self(object)
    }
}

/// Payload equal to the number of on voxels
#[derive(Debug, Clone, Copy, Default)]
pub struct VoxelCountPayload;

impl PayloadFn for VoxelCountPayload {
    fn payload(&self, object: &ObjectMask) -> MergeResult<f64> {
        Ok(object.count_on() as f64)
    }
}

/// Assigns the priority of the edge between two vertices
pub trait AssignPriority: Send + Sync {
    /// Prioritize merging `a` and `b` into `merged`
    fn assign(
        &self,
        a: &ObjectVertex,
        b: &ObjectVertex,
        merged: &ObjectVertex,
        resolution: Option<&Resolution>,
    ) -> MergeResult<EdgePriority>;
}

impl<F> AssignPriority for F
where
    F: Fn(&ObjectVertex, &ObjectVertex, &ObjectVertex, Option<&Resolution>) -> MergeResult<EdgePriority>
        + Send
        + Sync,
{
    fn assign(
        &self,
        a: &ObjectVertex,
        b: &ObjectVertex,
        merged: &ObjectVertex,
        resolution: Option<&Resolution>,
    ) -> MergeResult<EdgePriority> {
        self(a, b, merged, resolution)
    }
}

/// Priority = merged payload minus the larger endpoint payload.
///
/// Only merges that improve on both endpoints are eligible.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadIncrease;

impl AssignPriority for PayloadIncrease {
    fn assign(
        &self,
        a: &ObjectVertex,
        b: &ObjectVertex,
        merged: &ObjectVertex,
        _: Option<&Resolution>,
    ) -> MergeResult<EdgePriority> {
        let best = a.payload().max(b.payload());
        let gain = merged.payload() - best;
        Ok(EdgePriority::new(gain, gain > 0.0))
    }
}

/// Priority = smaller endpoint payload over the larger one.
///
/// Pairs of similar payload merge first. Every edge is eligible; two zero
/// payloads count as equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadRatio;

impl AssignPriority for PayloadRatio {
    fn assign(
        &self,
        a: &ObjectVertex,
        b: &ObjectVertex,
        _: &ObjectVertex,
        _: Option<&Resolution>,
    ) -> MergeResult<EdgePriority> {
        let (lo, hi) = if a.payload() <= b.payload() {
            (a.payload(), b.payload())
        } else {
            (b.payload(), a.payload())
        };
        let ratio = if hi == 0.0 { 1.0 } else { lo / hi };
        Ok(EdgePriority::eligible(ratio))
    }
}
