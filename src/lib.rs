//! # `tether` - Graph Container With Validated Handles
//!
//! A mutable, in-memory graph whose vertices and edges are addressed through
//! opaque, generation-tagged handles. Vertex and edge insertion are O(1)
//! amortized, removal keeps vertex storage dense by swap-and-pop, and every
//! handle is checked before use so a stale one fails loudly instead of
//! reading whatever now occupies its slot.
//!
//! ## Handle Guarantees
//!
//! - **Vertex handles** address a storage position. Removing vertex `x`
//!   invalidates `x`'s handle and the handle of the vertex that was last in
//!   storage order, because that vertex is moved into `x`'s position. Every
//!   other vertex handle stays valid.
//! - **Edge handles** address one adjacency record inside the source
//!   vertex's list. They go stale when the record is removed, when either
//!   endpoint is removed, or when the source vertex is relocated.
//! - **Foreign handles** (issued by a different graph, including the graph a
//!   clone was made from) are rejected.
//!
//! Operations taking a handle return [`GraphError::InvalidHandle`] for a stale
//! one and leave the graph untouched. Generations are wrapping `u32`
//! counters, so a handle kept across 2^32 reuses of one position is the only
//! staleness that goes undetected.
//!
//! ## Undirected Bookkeeping
//!
//! The default [`Graph`] is undirected: `add_edge(u, v, w)` stores a `u -> v`
//! record and a paired `v -> u` record (a single record when `u == v`), and
//! `remove_edge` erases both, so `has_edge(u, v) == has_edge(v, u)` always
//! holds. [`Graph::new_directed`] builds a graph with one record per edge.
//!
//! ## Traversals
//!
//! [`dfs`], [`Dfs`], [`Bfs`] and [`components`] run on explicit worklists
//! and only use the graph's public API.
//!
//! ## Example
//!
//! ```rust
//! use tether::{components, Graph};
//!
//! let mut graph: Graph<u32, ()> = Graph::new();
//! let v: Vec<_> = (0..5).map(|i| graph.add_vertex(i)).collect();
//! graph.add_edge(v[0], v[3], ()).unwrap();
//! graph.add_edge(v[2], v[3], ()).unwrap();
//! graph.add_edge(v[2], v[4], ()).unwrap();
//!
//! assert!(graph.has_edge(v[3], v[0]).unwrap());
//! assert_eq!(components(&graph).len(), 2);
//!
//! // Removing vertex 0 moves vertex 4 into its position.
//! graph.remove_vertex(v[0]).unwrap();
//! assert!(graph.vertex_value(v[4]).is_err());
//! let moved = graph.vertex_at(0).unwrap();
//! assert_eq!(graph.vertex_value(moved), Ok(&4));
//! ```
//!
//! ## Concurrency
//!
//! The graph does no internal synchronization. Share it across threads only
//! behind an external lock that serializes mutation.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for mutations and rejected handles.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod error;
pub mod graph;

pub use error::{GraphError, HandleKind, Result};
pub use graph::{
    component_count, components, dfs, Bfs, Dfs, DfsResult, Directed, EdgeHandle, EdgeType, Graph, Neighbors,
    OutEdges, Undirected, VertexHandle, VertexHandles,
};
