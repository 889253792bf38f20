//! Adjacency-list graph with validated handles.
//!
//! Vertices live in a dense table laid out as parallel vectors (values,
//! adjacency lists, per-position generations). Removal is swap-and-pop, so
//! positions are not stable; every handle carries the generation of its
//! position and is checked against the table before it is used.
//!
//! Vertical split:
//! - `handle`: `VertexHandle` / `EdgeHandle`
//! - `edges`: per-vertex adjacency storage
//! - `iter`: vertex and edge iteration
//! - `tests`: module tests
//!
//! # Invalidation rules
//! - `remove_vertex(x)` invalidates `x`, the handle of the vertex that was
//!   last in storage order (it is relocated into `x`'s position), every edge
//!   handle of an edge touching `x`, and every edge handle whose source is
//!   the relocated vertex. Records that pointed at the relocated vertex are
//!   retargeted in place.
//! - `remove_edge(e)` invalidates `e` (and, in an undirected graph, the
//!   handle of its mirror record).
//! - `clear()` invalidates everything.
//!
//! Generations are `u32` counters that wrap. A handle held across 2^32
//! invalidations of the same vertex position (or edge slot) would validate
//! again, so the detection is exact only below that many reuses.
//!
//! # Performance
//! - `add_vertex`: O(1) amortized
//! - `remove_vertex`: O(V + E), one relabelling pass over every list
//! - `add_edge`: O(1) amortized
//! - `remove_edge`: O(degree) of the endpoints
//! - `has_edge` / `find_edge`: O(degree)

use core::fmt;
use core::marker::PhantomData;

use crate::error::{GraphError, Result};
use crate::macros::trace_event;

mod edges;
mod handle;
mod iter;

use edges::AdjacencyList;
use handle::GraphId;
pub use handle::{EdgeHandle, VertexHandle};
pub use iter::{Neighbors, OutEdges, VertexHandles};

/// Marker trait for graph edge directionality.
pub trait EdgeType {
    /// Returns true if the graph is directed.
    fn is_directed() -> bool;
}

/// Marker for directed graphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Directed;
/// Marker for undirected graphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Undirected;

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }
}
impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }
}

/// A mutable graph holding vertex values `V` and edge weights `W`.
///
/// In the default undirected mode an edge `{u, v}` is stored as two
/// adjacency records, `u -> v` and `v -> u`, linked to each other; a
/// self-loop is stored once. In directed mode every edge is one record.
pub struct Graph<V, W, Ty = Undirected> {
    values: Vec<V>,
    adjacency: Vec<AdjacencyList<W>>,
    /// Generation per position. Never shrinks, so a position keeps counting
    /// after its vertex is popped and a later vertex there gets a new tag.
    generations: Vec<u32>,
    edge_count: usize,
    id: GraphId,
    _marker: PhantomData<Ty>,
}

impl<V, W> Graph<V, W, Undirected> {
    /// Creates a new empty undirected graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Adds an undirected edge between `from` and `to`.
    ///
    /// Stores a `from -> to` record and, unless `from == to`, a mirror
    /// `to -> from` record. Parallel edges are allowed. The returned handle
    /// addresses the `from -> to` record.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if either endpoint is not live. Nothing is
    /// inserted in that case.
    pub fn add_edge(&mut self, from: VertexHandle, to: VertexHandle, weight: W) -> Result<EdgeHandle>
    where
        W: Clone,
    {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;

        let (slot, generation) = if source == target {
            self.adjacency[source].push_front(weight, target, None)
        } else {
            let (slot, generation) = self.adjacency[source].push_front(weight.clone(), target, None);
            let (mirror, _) = self.adjacency[target].push_front(weight, source, Some(slot));
            self.adjacency[source].set_mirror(slot, Some(mirror));
            (slot, generation)
        };
        self.edge_count += 1;

        trace_event!(trace, from = source, to = target, slot, "added undirected edge");
        Ok(EdgeHandle::new(from, slot, generation))
    }

    /// Looks both endpoints up by value and connects them.
    ///
    /// # Errors
    /// [`GraphError::EndpointNotFound`] if either value is absent.
    pub fn add_edge_by_value(&mut self, from: &V, to: &V, weight: W) -> Result<EdgeHandle>
    where
        V: PartialEq,
        W: Clone,
    {
        let from = self.vertex_by_value(from)?;
        let to = self.vertex_by_value(to)?;
        self.add_edge(from, to, weight)
    }

    /// Removes the undirected edge addressed by `edge` and returns its weight.
    ///
    /// Both the addressed record and its mirror are erased, so
    /// `has_edge(u, v)` and `has_edge(v, u)` stay in agreement.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if `edge` is stale.
    pub fn remove_edge(&mut self, edge: EdgeHandle) -> Result<W> {
        let source = self.resolve_edge(edge)?;
        let record = self.remove_record(source, edge.slot())?;
        if let Some(mirror) = record.mirror {
            if record.target != source {
                self.adjacency[record.target].unlink(mirror);
            }
        }
        self.edge_count -= 1;

        trace_event!(trace, from = source, to = record.target, "removed undirected edge");
        Ok(record.weight)
    }

    /// Replaces the weight of the undirected edge addressed by `edge` and
    /// returns the old one.
    ///
    /// Both records of the edge are updated, so either side's handle reads
    /// the same weight afterwards.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if `edge` is stale.
    pub fn set_edge_weight(&mut self, edge: EdgeHandle, weight: W) -> Result<W>
    where
        W: Clone,
    {
        let source = self.resolve_edge(edge)?;
        let record = self.adjacency[source]
            .get_mut(edge.slot(), edge.generation())
            .ok_or(GraphError::EDGE)?;
        let (target, mirror) = (record.target, record.mirror);
        let old = core::mem::replace(&mut record.weight, weight.clone());
        if let Some(mirror) = mirror {
            if let Some(paired) = self.adjacency[target].record_mut(mirror) {
                paired.weight = weight;
            }
        }
        Ok(old)
    }

    /// Removes the first edge between `from` and `to`, both directions.
    ///
    /// Returns `Ok(None)` if the two vertices are not adjacent.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if either endpoint is not live.
    pub fn remove_undirected_edge(&mut self, from: VertexHandle, to: VertexHandle) -> Result<Option<W>> {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;
        match self.adjacency[source].find(target) {
            Some((slot, generation)) => self.remove_edge(EdgeHandle::new(from, slot, generation)).map(Some),
            None => Ok(None),
        }
    }
}

impl<V, W> Graph<V, W, Directed> {
    /// Creates a new empty directed graph.
    pub fn new_directed() -> Self {
        Self::with_capacity(0)
    }

    /// Adds a directed edge `from -> to`.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if either endpoint is not live.
    pub fn add_edge(&mut self, from: VertexHandle, to: VertexHandle, weight: W) -> Result<EdgeHandle> {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;
        let (slot, generation) = self.adjacency[source].push_front(weight, target, None);
        self.edge_count += 1;

        trace_event!(trace, from = source, to = target, slot, "added directed edge");
        Ok(EdgeHandle::new(from, slot, generation))
    }

    /// Looks both endpoints up by value and connects them.
    ///
    /// # Errors
    /// [`GraphError::EndpointNotFound`] if either value is absent.
    pub fn add_edge_by_value(&mut self, from: &V, to: &V, weight: W) -> Result<EdgeHandle>
    where
        V: PartialEq,
    {
        let from = self.vertex_by_value(from)?;
        let to = self.vertex_by_value(to)?;
        self.add_edge(from, to, weight)
    }

    /// Removes the directed edge addressed by `edge` and returns its weight.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if `edge` is stale.
    pub fn remove_edge(&mut self, edge: EdgeHandle) -> Result<W> {
        let source = self.resolve_edge(edge)?;
        let record = self.remove_record(source, edge.slot())?;
        self.edge_count -= 1;

        trace_event!(trace, from = source, to = record.target, "removed directed edge");
        Ok(record.weight)
    }

    /// Replaces the weight of `edge` and returns the old one.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if `edge` is stale.
    pub fn set_edge_weight(&mut self, edge: EdgeHandle, weight: W) -> Result<W> {
        Ok(core::mem::replace(self.edge_weight_mut(edge)?, weight))
    }

    /// Returns the weight of `edge`, mutably.
    ///
    /// Only directed graphs hand out a `&mut W`; undirected edges keep two
    /// copies and go through `set_edge_weight`.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if `edge` is stale.
    pub fn edge_weight_mut(&mut self, edge: EdgeHandle) -> Result<&mut W> {
        let source = self.resolve_edge(edge)?;
        self.adjacency[source]
            .get_mut(edge.slot(), edge.generation())
            .map(|record| &mut record.weight)
            .ok_or(GraphError::EDGE)
    }
}

impl<V, W, Ty: EdgeType> Graph<V, W, Ty> {
    /// Creates an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            values: Vec::with_capacity(vertices),
            adjacency: Vec::with_capacity(vertices),
            generations: Vec::with_capacity(vertices),
            edge_count: 0,
            id: GraphId::fresh(),
            _marker: PhantomData,
        }
    }

    /// Reserves room for at least `additional` more vertices.
    pub fn reserve(&mut self, additional: usize) {
        self.values.reserve(additional);
        self.adjacency.reserve(additional);
        if let Some(missing) = (self.values.len() + additional).checked_sub(self.generations.len()) {
            self.generations.reserve(missing);
        }
    }

    /// Returns true if the graph is directed.
    #[inline]
    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    /// Number of live vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.values.len()
    }

    /// Number of logical edges. An undirected edge counts once, as does a self-loop.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Appends a vertex holding `value`.
    ///
    /// The handle stays valid until this vertex is removed, or until it is
    /// the last vertex in storage order when another vertex is removed.
    pub fn add_vertex(&mut self, value: V) -> VertexHandle {
        let position = self.values.len();
        self.values.push(value);
        self.adjacency.push(AdjacencyList::new());
        if position == self.generations.len() {
            self.generations.push(0);
        }
        let generation = self.generations[position];

        trace_event!(trace, position, generation, "added vertex");
        VertexHandle::new(self.id, position, generation)
    }

    /// Removes the vertex addressed by `vertex` and returns its value.
    ///
    /// Every edge touching the vertex is dropped. The vertex that was last in
    /// storage order moves into the vacated position; its old handle is
    /// invalidated and the records that pointed at it are retargeted.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if `vertex` is stale.
    pub fn remove_vertex(&mut self, vertex: VertexHandle) -> Result<V> {
        let removed = self.resolve(vertex)?;
        let last = self.values.len() - 1;

        let own = self.adjacency[removed].len();
        let mut dropped_elsewhere = 0;
        for (position, list) in self.adjacency.iter_mut().enumerate() {
            if position != removed {
                dropped_elsewhere += list.relabel(removed, last);
            }
        }

        let value = self.values.swap_remove(removed);
        self.adjacency.swap_remove(removed);

        // Wraps after 2^32 reuses of a position; see the module docs.
        self.generations[removed] = self.generations[removed].wrapping_add(1);
        if last != removed {
            self.generations[last] = self.generations[last].wrapping_add(1);
        }

        // Undirected: each incident edge owns exactly one record in the removed list.
        self.edge_count -= if Ty::is_directed() { own + dropped_elsewhere } else { own };

        trace_event!(
            debug,
            removed,
            relocated_from = last,
            edges_dropped = own + dropped_elsewhere,
            "removed vertex"
        );
        Ok(value)
    }

    /// Returns true if `vertex` addresses a live vertex of this graph.
    #[inline]
    pub fn contains_vertex(&self, vertex: VertexHandle) -> bool {
        vertex.graph() == self.id
            && vertex.position() < self.values.len()
            && self.generations[vertex.position()] == vertex.generation()
    }

    /// Returns the current handle of the vertex at `position`, if any.
    pub fn vertex_at(&self, position: usize) -> Option<VertexHandle> {
        (position < self.values.len()).then(|| VertexHandle::new(self.id, position, self.generations[position]))
    }

    /// Iterates every live vertex handle in storage order.
    pub fn vertex_handles(&self) -> VertexHandles<'_> {
        VertexHandles::new(self.id, &self.generations, self.values.len())
    }

    /// Returns the value stored at `vertex`.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if `vertex` is stale.
    pub fn vertex_value(&self, vertex: VertexHandle) -> Result<&V> {
        let position = self.resolve(vertex)?;
        Ok(&self.values[position])
    }

    /// Returns the value stored at `vertex`, mutably.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if `vertex` is stale.
    pub fn vertex_value_mut(&mut self, vertex: VertexHandle) -> Result<&mut V> {
        let position = self.resolve(vertex)?;
        Ok(&mut self.values[position])
    }

    /// First vertex (in storage order) whose value equals `value`.
    ///
    /// Linear scan.
    pub fn find_vertex(&self, value: &V) -> Option<VertexHandle>
    where
        V: PartialEq,
    {
        let position = self.values.iter().position(|v| v == value)?;
        Some(VertexHandle::new(self.id, position, self.generations[position]))
    }

    /// Like [`find_vertex`](Self::find_vertex), but a miss is an error.
    ///
    /// # Errors
    /// [`GraphError::EndpointNotFound`] if no vertex holds `value`.
    pub fn vertex_by_value(&self, value: &V) -> Result<VertexHandle>
    where
        V: PartialEq,
    {
        self.find_vertex(value).ok_or(GraphError::EndpointNotFound)
    }

    /// Out-degree of `vertex`: the number of records in its adjacency list.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if `vertex` is stale.
    pub fn degree(&self, vertex: VertexHandle) -> Result<usize> {
        let position = self.resolve(vertex)?;
        Ok(self.adjacency[position].len())
    }

    /// Iterates the edge handles of `vertex`'s adjacency list.
    ///
    /// The order is the list order, most recently added first.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if `vertex` is stale.
    pub fn out_edges(&self, vertex: VertexHandle) -> Result<OutEdges<'_, W>> {
        let position = self.resolve(vertex)?;
        Ok(OutEdges::new(vertex, self.adjacency[position].iter()))
    }

    /// Iterates `(target, &weight)` over `vertex`'s adjacency list.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if `vertex` is stale.
    pub fn neighbors(&self, vertex: VertexHandle) -> Result<Neighbors<'_, W>> {
        let position = self.resolve(vertex)?;
        Ok(Neighbors::new(self.id, &self.generations, self.adjacency[position].iter()))
    }

    /// First record in `from`'s list that targets `to`.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if either endpoint is not live.
    pub fn find_edge(&self, from: VertexHandle, to: VertexHandle) -> Result<Option<EdgeHandle>> {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;
        Ok(self.adjacency[source]
            .find(target)
            .map(|(slot, generation)| EdgeHandle::new(from, slot, generation)))
    }

    /// Returns true if `from`'s list holds a record targeting `to`.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if either endpoint is not live.
    pub fn has_edge(&self, from: VertexHandle, to: VertexHandle) -> Result<bool> {
        Ok(self.find_edge(from, to)?.is_some())
    }

    /// Returns true if `edge` addresses a live record of this graph.
    pub fn contains_edge(&self, edge: EdgeHandle) -> bool {
        self.resolve_edge(edge).is_ok()
    }

    /// Returns the weight of `edge`.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if `edge` is stale.
    pub fn edge_weight(&self, edge: EdgeHandle) -> Result<&W> {
        let source = self.resolve_edge(edge)?;
        self.adjacency[source]
            .get(edge.slot(), edge.generation())
            .map(|record| &record.weight)
            .ok_or(GraphError::EDGE)
    }

    /// The vertex whose adjacency list holds `edge`.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if `edge` is stale.
    pub fn edge_source(&self, edge: EdgeHandle) -> Result<VertexHandle> {
        self.resolve_edge(edge)?;
        Ok(edge.source())
    }

    /// The vertex `edge` points at.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if `edge` is stale.
    pub fn edge_target(&self, edge: EdgeHandle) -> Result<VertexHandle> {
        let source = self.resolve_edge(edge)?;
        let target = self.adjacency[source]
            .get(edge.slot(), edge.generation())
            .map(|record| record.target)
            .ok_or(GraphError::EDGE)?;
        Ok(VertexHandle::new(self.id, target, self.generations[target]))
    }

    /// `(source, target)` of `edge`.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if `edge` is stale.
    pub fn edge_endpoints(&self, edge: EdgeHandle) -> Result<(VertexHandle, VertexHandle)> {
        Ok((self.edge_source(edge)?, self.edge_target(edge)?))
    }

    /// Removes every vertex and edge. All outstanding handles become invalid.
    pub fn clear(&mut self) {
        trace_event!(debug, vertices = self.values.len(), edges = self.edge_count, "cleared graph");
        self.values.clear();
        self.adjacency.clear();
        self.generations.clear();
        self.edge_count = 0;
        self.id = GraphId::fresh();
    }

    fn resolve(&self, vertex: VertexHandle) -> Result<usize> {
        if self.contains_vertex(vertex) {
            Ok(vertex.position())
        } else {
            trace_event!(
                debug,
                position = vertex.position(),
                generation = vertex.generation(),
                "rejected vertex handle"
            );
            Err(GraphError::VERTEX)
        }
    }

    fn resolve_edge(&self, edge: EdgeHandle) -> Result<usize> {
        let source = self.resolve(edge.source()).map_err(|_| GraphError::EDGE)?;
        if self.adjacency[source].get(edge.slot(), edge.generation()).is_some() {
            Ok(source)
        } else {
            trace_event!(debug, source, slot = edge.slot(), "rejected edge handle");
            Err(GraphError::EDGE)
        }
    }

    /// Single-direction removal; the caller handles mirrors and counts.
    fn remove_record(&mut self, source: usize, slot: usize) -> Result<edges::EdgeRecord<W>> {
        self.adjacency[source].unlink(slot).ok_or(GraphError::EDGE)
    }
}

impl<V, W, Ty: EdgeType> Default for Graph<V, W, Ty> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

/// The clone is a new graph: handles issued by `self` are rejected by it.
/// Re-acquire them with [`Graph::vertex_at`] or [`Graph::vertex_handles`].
impl<V: Clone, W: Clone, Ty: EdgeType> Clone for Graph<V, W, Ty> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            adjacency: self.adjacency.clone(),
            generations: self.generations.clone(),
            edge_count: self.edge_count,
            id: GraphId::fresh(),
            _marker: PhantomData,
        }
    }
}

impl<V: fmt::Debug, W, Ty: EdgeType> fmt::Debug for Graph<V, W, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("directed", &Ty::is_directed())
            .field("vertices", &self.values)
            .field("edge_count", &self.edge_count)
            .finish_non_exhaustive()
    }
}
