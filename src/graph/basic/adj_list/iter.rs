use core::iter::FusedIterator;
use core::ops::Range;

use super::edges::Records;
use super::handle::{EdgeHandle, GraphId, VertexHandle};

/// Iterator over every live vertex handle, in storage order.
///
/// Borrows the graph, so the sequence cannot be invalidated while it exists.
/// Cloning restarts from the clone's current point.
#[derive(Clone)]
pub struct VertexHandles<'a> {
    generations: &'a [u32],
    positions: Range<usize>,
    graph: GraphId,
}

impl<'a> VertexHandles<'a> {
    pub(super) fn new(graph: GraphId, generations: &'a [u32], len: usize) -> Self {
        Self {
            generations,
            positions: 0..len,
            graph,
        }
    }
}

impl Iterator for VertexHandles<'_> {
    type Item = VertexHandle;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let position = self.positions.next()?;
        Some(VertexHandle::new(self.graph, position, self.generations[position]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl DoubleEndedIterator for VertexHandles<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let position = self.positions.next_back()?;
        Some(VertexHandle::new(self.graph, position, self.generations[position]))
    }
}

impl ExactSizeIterator for VertexHandles<'_> {}
impl FusedIterator for VertexHandles<'_> {}

/// Iterator over the adjacency records of one vertex, as edge handles.
///
/// Records come out in adjacency-list order: most recently inserted first.
pub struct OutEdges<'a, W> {
    records: Records<'a, W>,
    source: VertexHandle,
}

impl<'a, W> OutEdges<'a, W> {
    pub(super) fn new(source: VertexHandle, records: Records<'a, W>) -> Self {
        Self { records, source }
    }
}

impl<W> Clone for OutEdges<'_, W> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            source: self.source,
        }
    }
}

impl<W> Iterator for OutEdges<'_, W> {
    type Item = EdgeHandle;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (slot, generation, _) = self.records.next()?;
        Some(EdgeHandle::new(self.source, slot, generation))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl<W> ExactSizeIterator for OutEdges<'_, W> {}

/// Iterator over the target vertices of one vertex's adjacency records.
///
/// Yields `(target, &weight)`. A target appears once per record, so parallel
/// edges repeat it and an undirected self-loop yields the source once.
pub struct Neighbors<'a, W> {
    records: Records<'a, W>,
    generations: &'a [u32],
    graph: GraphId,
}

impl<'a, W> Neighbors<'a, W> {
    pub(super) fn new(graph: GraphId, generations: &'a [u32], records: Records<'a, W>) -> Self {
        Self {
            records,
            generations,
            graph,
        }
    }
}

impl<W> Clone for Neighbors<'_, W> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            generations: self.generations,
            graph: self.graph,
        }
    }
}

impl<'a, W> Iterator for Neighbors<'a, W> {
    type Item = (VertexHandle, &'a W);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (_, _, record) = self.records.next()?;
        let target = VertexHandle::new(self.graph, record.target, self.generations[record.target]);
        Some((target, &record.weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl<W> ExactSizeIterator for Neighbors<'_, W> {}
