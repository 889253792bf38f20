//! Opaque handles into a [`Graph`](super::Graph).
//!
//! A handle is a generation-tagged position plus the identity of the graph
//! that issued it. The graph bumps the generation of a position whenever the
//! vertex that lived there is removed or relocated, so a stale handle is
//! rejected in O(1) instead of resolving to whatever now occupies the slot.

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

static NEXT_GRAPH_ID: AtomicU32 = AtomicU32::new(0);

/// Identity of one graph instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct GraphId(u32);

impl GraphId {
    pub(crate) fn fresh() -> Self {
        GraphId(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A handle to a vertex's current storage position.
///
/// Valid until the vertex is removed, or until the vertex occupying the
/// position that was last in storage order is relocated by a removal. After
/// that the handle is rejected with
/// [`GraphError::InvalidHandle`](crate::GraphError::InvalidHandle) and a fresh one must be
/// obtained, e.g. through [`Graph::vertex_at`](super::Graph::vertex_at).
///
/// Handles order by position first, so a sorted set of handles lists the
/// vertices in storage order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexHandle {
    position: usize,
    generation: u32,
    graph: GraphId,
}

impl VertexHandle {
    #[inline]
    pub(crate) fn new(graph: GraphId, position: usize, generation: u32) -> Self {
        Self {
            position,
            generation,
            graph,
        }
    }

    /// The storage position this handle addresses.
    #[inline]
    pub fn position(self) -> usize {
        self.position
    }

    /// The generation of the position at the time this handle was issued.
    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }

    #[inline]
    pub(crate) fn graph(self) -> GraphId {
        self.graph
    }
}

impl fmt::Debug for VertexHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexHandle({}v{})", self.position, self.generation)
    }
}

/// A handle to one directed adjacency record.
///
/// The record lives in the adjacency list of its source vertex, so the
/// handle is only as valid as that vertex's handle: it is rejected once the
/// record is removed, or once the source vertex is removed or relocated.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeHandle {
    source: VertexHandle,
    slot: usize,
    generation: u32,
}

impl EdgeHandle {
    #[inline]
    pub(crate) fn new(source: VertexHandle, slot: usize, generation: u32) -> Self {
        Self {
            source,
            slot,
            generation,
        }
    }

    /// The handle of the vertex whose adjacency list holds this record.
    ///
    /// This is the handle as it was when the edge handle was issued; it goes
    /// stale together with the edge handle.
    #[inline]
    pub fn source(self) -> VertexHandle {
        self.source
    }

    #[inline]
    pub(crate) fn slot(self) -> usize {
        self.slot
    }

    #[inline]
    pub(crate) fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for EdgeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EdgeHandle({}v{}#{}v{})",
            self.source.position, self.source.generation, self.slot, self.generation
        )
    }
}
