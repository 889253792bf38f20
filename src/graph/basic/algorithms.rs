//! Graph traversals and connected components for [`Graph`].
//!
//! Everything here is written against the graph's public API (handles,
//! `vertex_handles`, `neighbors`); nothing reaches into its storage. Both
//! traversals run on an explicit worklist, so their memory use is bounded by
//! the graph size rather than by its depth.

use std::collections::{BTreeSet, VecDeque};

use crate::error::{GraphError, HandleKind, Result};
use crate::graph::access::visited::VisitedSet;
use crate::graph::basic::adj_list::{EdgeType, Graph, Undirected, VertexHandle};

/// An iterator for Depth-First Search (DFS).
///
/// Yields vertex handles in visit order. A popped vertex pushes its
/// adjacency targets in adjacency-list order, and that list is newest edge
/// first, so among a vertex's neighbours the one connected *earliest* is
/// visited next.
pub struct Dfs<'a, V, W, Ty> {
    graph: &'a Graph<V, W, Ty>,
    visited: VisitedSet,
    stack: Vec<VertexHandle>,
}

impl<'a, V, W, Ty: EdgeType> Dfs<'a, V, W, Ty> {
    /// Creates a new DFS iterator starting from `start`.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if `start` is not a live vertex of `graph`.
    pub fn new(graph: &'a Graph<V, W, Ty>, start: VertexHandle) -> Result<Self> {
        if !graph.contains_vertex(start) {
            return Err(GraphError::InvalidHandle(HandleKind::Vertex));
        }
        Ok(Self::resume(graph, start, VisitedSet::new(graph.vertex_count())))
    }

    /// Continues a search from `start` over an already populated visited
    /// set. Vertices marked in `visited` are neither yielded nor expanded.
    pub(crate) fn resume(graph: &'a Graph<V, W, Ty>, start: VertexHandle, visited: VisitedSet) -> Self {
        Self {
            graph,
            visited,
            stack: vec![start],
        }
    }

    /// Hands the visited set back once the search is done with it.
    pub(crate) fn into_visited(self) -> VisitedSet {
        self.visited
    }

    /// Returns true if `vertex` has already been yielded.
    pub fn is_visited(&self, vertex: VertexHandle) -> bool {
        self.graph.contains_vertex(vertex) && self.visited.is_visited(vertex.position())
    }
}

impl<V, W, Ty: EdgeType> Iterator for Dfs<'_, V, W, Ty> {
    type Item = VertexHandle;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(u) = self.stack.pop() {
            if !self.visited.try_visit(u.position()) {
                continue;
            }
            let neighbors = self.graph.neighbors(u);
            debug_assert!(neighbors.is_ok(), "graph borrowed by Dfs yielded a stale handle");
            if let Ok(neighbors) = neighbors {
                let visited = &self.visited;
                self.stack
                    .extend(neighbors.map(|(target, _)| target).filter(|t| !visited.is_visited(t.position())));
            }
            return Some(u);
        }
        None
    }
}

/// An iterator for Breadth-First Search (BFS).
///
/// Yields vertex handles in BFS order; vertices are marked when enqueued.
pub struct Bfs<'a, V, W, Ty> {
    graph: &'a Graph<V, W, Ty>,
    visited: VisitedSet,
    queue: VecDeque<VertexHandle>,
}

impl<'a, V, W, Ty: EdgeType> Bfs<'a, V, W, Ty> {
    /// Creates a new BFS iterator starting from `start`.
    ///
    /// # Errors
    /// [`GraphError::InvalidHandle`] if `start` is not a live vertex of `graph`.
    pub fn new(graph: &'a Graph<V, W, Ty>, start: VertexHandle) -> Result<Self> {
        if !graph.contains_vertex(start) {
            return Err(GraphError::InvalidHandle(HandleKind::Vertex));
        }
        let mut visited = VisitedSet::new(graph.vertex_count());
        visited.try_visit(start.position());
        Ok(Self {
            graph,
            visited,
            queue: VecDeque::from([start]),
        })
    }
}

impl<V, W, Ty: EdgeType> Iterator for Bfs<'_, V, W, Ty> {
    type Item = VertexHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        let neighbors = self.graph.neighbors(u);
        debug_assert!(neighbors.is_ok(), "graph borrowed by Bfs yielded a stale handle");
        if let Ok(neighbors) = neighbors {
            for (target, _) in neighbors {
                if self.visited.try_visit(target.position()) {
                    self.queue.push_back(target);
                }
            }
        }
        Some(u)
    }
}

/// Outcome of a depth-first search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsResult {
    /// Every vertex reachable from the start, the start included.
    pub visited: BTreeSet<VertexHandle>,
    /// The same vertices in the order they were visited.
    pub order: Vec<VertexHandle>,
}

/// Runs a depth-first search from `start`.
///
/// # Errors
/// [`GraphError::InvalidHandle`] if `start` is not a live vertex of `graph`.
pub fn dfs<V, W, Ty: EdgeType>(graph: &Graph<V, W, Ty>, start: VertexHandle) -> Result<DfsResult> {
    let order: Vec<_> = Dfs::new(graph, start)?.collect();
    let visited = order.iter().copied().collect();
    Ok(DfsResult { visited, order })
}

/// Computes the connected components of an undirected graph.
///
/// Vertices are taken in storage order; each one not yet placed in a
/// component roots a new DFS whose visited set becomes the next component.
/// The result partitions the vertex set. O(V + E) overall.
pub fn components<V, W>(graph: &Graph<V, W, Undirected>) -> Vec<BTreeSet<VertexHandle>> {
    let mut components = Vec::new();
    for_each_component(graph, |component| components.push(component.collect()));
    components
}

/// Number of connected components of an undirected graph.
pub fn component_count<V, W>(graph: &Graph<V, W, Undirected>) -> usize {
    let mut count = 0;
    for_each_component(graph, |component| {
        component.for_each(drop);
        count += 1;
    });
    count
}

/// Roots one DFS per unplaced vertex, all sharing a single visited set, and
/// hands each search to `visit`. The callback must drain its search.
fn for_each_component<V, W, F>(graph: &Graph<V, W, Undirected>, mut visit: F)
where
    F: FnMut(&mut Dfs<'_, V, W, Undirected>),
{
    let mut assigned = VisitedSet::new(graph.vertex_count());

    for root in graph.vertex_handles() {
        if assigned.is_visited(root.position()) {
            continue;
        }
        let mut search = Dfs::resume(graph, root, assigned);
        visit(&mut search);
        assigned = search.into_visited();
    }
}
