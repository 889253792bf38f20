//! Basic graph implementations.
//!
//! `adj_list` holds the container; `algorithms` holds the traversals built on
//! top of its public API.

pub mod adj_list;
pub mod algorithms;

pub use adj_list::{
    Directed, EdgeHandle, EdgeType, Graph, Neighbors, OutEdges, Undirected, VertexHandle, VertexHandles,
};
pub use algorithms::{component_count, components, dfs, Bfs, Dfs, DfsResult};
