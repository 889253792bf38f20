//! Graph container and traversals.
//!
//! Graph code is organized into:
//! - `basic`: the adjacency-list container and the algorithms on it
//! - `access`: crate-internal traversal scratch structures

pub mod basic;
pub(crate) mod access;

pub use basic::{
    component_count, components, dfs, Bfs, Dfs, DfsResult, Directed, EdgeHandle, EdgeType, Graph, Neighbors,
    OutEdges, Undirected, VertexHandle, VertexHandles,
};
