//! Neighbor object graph
//!
//! Vertices are live objects; an edge joins two vertices the
//! [`BeforeCondition`](crate::BeforeCondition) accepts and carries the
//! priority of merging them together with the precomputed merged vertex.
//!
//! # Storage
//!
//! - Vertices live in an arena indexed by [`VertexId`]; a merged vertex
//!   leaves an empty slot and its replacement is appended
//! - Edges live in a slab indexed by [`EdgeId`] whose free slots are reused
//! - Each vertex keeps a `BTreeMap` from neighbor to edge, so neighbors are
//!   visited in a fixed order
//! - Eligible edges are additionally indexed by their selection key, making
//!   [`NeighborGraph::find_max_priority`] a lookup
//!
//! Merging touches only the two endpoints and their neighbors:
//! O(deg(a) + deg(b)) graph updates plus one condition check per collected
//! neighbor.

use crate::edge::{EdgeId, EdgePriority, PrioritizedEdge, SelectionKey};
use crate::engine::MergeRules;
use crate::error::{MergeError, MergeResult};
use crate::vertex::{ObjectVertex, VertexId};
use std::collections::{BTreeMap, BTreeSet};
use voxseg_core::{ObjectCollection, ObjectMask};

#[derive(Debug)]
struct VertexSlot {
    vertex: ObjectVertex,
    neighbors: BTreeMap<VertexId, EdgeId>,
}

/// Graph of neighboring objects driven by a set of [`MergeRules`]
pub struct NeighborGraph<'r> {
    rules: &'r MergeRules,
    vertices: Vec<Option<VertexSlot>>,
    live_vertices: usize,
    edges: Vec<Option<PrioritizedEdge>>,
    free_edges: Vec<usize>,
    live_edges: usize,
    eligible: BTreeSet<SelectionKey>,
    next_sequence: u64,
}

impl<'r> NeighborGraph<'r> {
    /// Create an empty graph
    pub fn new(rules: &'r MergeRules) -> Self {
        Self {
            rules,
            vertices: Vec::new(),
            live_vertices: 0,
            edges: Vec::new(),
            free_edges: Vec::new(),
            live_edges: 0,
            eligible: BTreeSet::new(),
            next_sequence: 0,
        }
    }

    /// Number of live vertices
    pub fn vertex_count(&self) -> usize {
        self.live_vertices
    }

    /// Number of live edges
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    /// Number of edges that may still be selected
    pub fn eligible_edge_count(&self) -> usize {
        self.eligible.len()
    }

    /// Look up a live vertex
    pub fn vertex(&self, id: VertexId) -> Option<&ObjectVertex> {
        self.slot(id).map(|slot| &slot.vertex)
    }

    /// Look up a live edge
    pub fn edge(&self, id: EdgeId) -> Option<&PrioritizedEdge> {
        self.edges.get(id.0).and_then(Option::as_ref)
    }

    /// Ids of the live vertices in insertion order
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| VertexId(i))
    }

    /// Neighbors of a vertex with the connecting edges, ordered by id
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = (VertexId, EdgeId)> + '_ {
        self.slot(id)
            .into_iter()
            .flat_map(|slot| slot.neighbors.iter().map(|(&v, &e)| (v, e)))
    }

    /// Compute the payload of `object` and add it as a vertex.
    ///
    /// Every live vertex is a candidate neighbor.
    ///
    /// # Errors
    ///
    /// Propagates failures of the payload function and of the vertex
    /// insertion (see [`NeighborGraph::add_vertex`]).
    pub fn add_object(&mut self, object: ObjectMask) -> MergeResult<VertexId> {
        let payload = self.rules.payload.payload(&object)?;
        let candidates: Vec<VertexId> = self.vertex_ids().collect();
        self.add_vertex(ObjectVertex::new(object, payload), &candidates)
    }

    /// Add a vertex and connect it to the accepted candidates.
    ///
    /// For every candidate the before-condition is checked; for accepted
    /// pairs the merged object and its payload are computed, the optional
    /// after-condition is checked and the priority is assigned.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::InvalidVertex`] for a candidate that is not
    /// live, [`MergeError::OperationFailed`] for a NaN priority, and
    /// propagates every failure of the rules.
    pub fn add_vertex(
        &mut self,
        vertex: ObjectVertex,
        candidates: &[VertexId],
    ) -> MergeResult<VertexId> {
        if let Some(&missing) = candidates.iter().find(|&&c| self.slot(c).is_none()) {
            return Err(MergeError::InvalidVertex(missing));
        }

        let id = VertexId(self.vertices.len());
        self.vertices.push(Some(VertexSlot {
            vertex,
            neighbors: BTreeMap::new(),
        }));
        self.live_vertices += 1;

        let candidates: BTreeSet<VertexId> = candidates.iter().copied().collect();
        for candidate in candidates {
            if let Some((priority, merged)) = self.evaluate_pair(id, candidate)? {
                self.insert_edge(id, candidate, priority, merged);
            }
        }
        Ok(id)
    }

    /// The eligible edge to merge next.
    ///
    /// The highest priority wins; exact ties go to the edge whose merged
    /// object has the smaller first voxel (compared x, then y, then z), then
    /// to the older edge. Returns `None` when no edge is eligible.
    pub fn find_max_priority(&self) -> Option<EdgeId> {
        self.eligible.last().map(|key| key.edge)
    }

    /// Merge the endpoints of an edge.
    ///
    /// Both endpoints and all their edges are removed, the precomputed
    /// merged vertex is inserted and connected to the union of the former
    /// neighbors.
    ///
    /// # Returns
    ///
    /// The id of the merged vertex.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::InvalidEdge`] if `edge` is not live and
    /// propagates rule failures while reconnecting.
    pub fn merge(&mut self, edge: EdgeId) -> MergeResult<VertexId> {
        let removed = self.remove_edge(edge).ok_or(MergeError::InvalidEdge(edge))?;
        let (a, b) = removed.endpoints();

        let mut neighbors = BTreeSet::new();
        for endpoint in [a, b] {
            let slot = self.vertices[endpoint.0]
                .take()
                .ok_or(MergeError::InvalidVertex(endpoint))?;
            self.live_vertices -= 1;
            for (neighbor, edge) in slot.neighbors {
                self.remove_edge(edge);
                if neighbor != a && neighbor != b {
                    neighbors.insert(neighbor);
                }
            }
        }

        let candidates: Vec<VertexId> = neighbors.into_iter().collect();
        let merged = self.add_vertex(removed.merged, &candidates)?;
        tracing::trace!(
            %a,
            %b,
            %merged,
            priority = removed.priority.priority,
            neighbors = candidates.len(),
            "merged vertices"
        );
        Ok(merged)
    }

    /// Consume the graph, returning the live objects in vertex order
    pub fn into_objects(self) -> ObjectCollection {
        self.vertices
            .into_iter()
            .flatten()
            .map(|slot| slot.vertex.into_object())
            .collect()
    }

    fn slot(&self, id: VertexId) -> Option<&VertexSlot> {
        self.vertices.get(id.0).and_then(Option::as_ref)
    }

    /// Run the rules on a pair, returning the edge contents if accepted
    fn evaluate_pair(
        &self,
        a: VertexId,
        b: VertexId,
    ) -> MergeResult<Option<(EdgePriority, ObjectVertex)>> {
        let (Some(va), Some(vb)) = (self.vertex(a), self.vertex(b)) else {
            return Ok(None);
        };
        let rules = self.rules;
        let resolution = rules.resolution.as_ref();

        if !rules.before.accept(va, vb, resolution)? {
            return Ok(None);
        }

        let object = va.object().union(vb.object());
        let payload = rules.payload.payload(&object)?;
        let merged = ObjectVertex::new(object, payload);

        if let Some(after) = &rules.after {
            if !after.accept(va, vb, &merged, resolution)? {
                return Ok(None);
            }
        }

        let mut priority = rules.priority.assign(va, vb, &merged, resolution)?;
        if priority.priority.is_nan() {
            return Err(MergeError::OperationFailed(format!(
                "priority of the edge between {} and {} is NaN",
                a, b
            )));
        }
        // -0.0 and 0.0 must tie
        priority.priority += 0.0;
        Ok(Some((priority, merged)))
    }

    fn insert_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        priority: EdgePriority,
        merged: ObjectVertex,
    ) {
        let edge = PrioritizedEdge {
            source,
            target,
            priority,
            representative: merged.object().first_point(),
            merged,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;

        let id = match self.free_edges.pop() {
            Some(index) => EdgeId(index),
            None => {
                self.edges.push(None);
                EdgeId(self.edges.len() - 1)
            }
        };
        if priority.consider_for_merge {
            self.eligible.insert(SelectionKey::of(id, &edge));
        }
        self.edges[id.0] = Some(edge);
        self.live_edges += 1;

        for (from, to) in [(source, target), (target, source)] {
            if let Some(slot) = self.vertices[from.0].as_mut() {
                slot.neighbors.insert(to, id);
            }
        }
    }

    /// Remove an edge from the slab, the eligible index and both adjacency
    /// maps
    fn remove_edge(&mut self, id: EdgeId) -> Option<PrioritizedEdge> {
        let edge = self.edges.get_mut(id.0)?.take()?;
        self.free_edges.push(id.0);
        self.live_edges -= 1;
        if edge.priority.consider_for_merge {
            self.eligible.remove(&SelectionKey::of(id, &edge));
        }
        for (from, to) in [(edge.source, edge.target), (edge.target, edge.source)] {
            if let Some(slot) = self.vertices[from.0].as_mut() {
                slot.neighbors.remove(&to);
            }
        }
        Some(edge)
    }
}
