//! Error types for graph operations.

use core::fmt;

/// Which kind of handle was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// A [`VertexHandle`](crate::VertexHandle).
    Vertex,
    /// An [`EdgeHandle`](crate::EdgeHandle).
    Edge,
}

impl fmt::Display for HandleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandleKind::Vertex => f.write_str("vertex"),
            HandleKind::Edge => f.write_str("edge"),
        }
    }
}

/// Errors returned by [`Graph`](crate::Graph) operations.
///
/// A failed operation never leaves the graph partially mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The handle does not address a live vertex or edge of this graph.
    ///
    /// Covers handles invalidated by a removal, handles whose position is out
    /// of range, and handles issued by another graph instance.
    #[error("invalid {0} handle")]
    InvalidHandle(HandleKind),

    /// A value-based lookup found no matching vertex.
    #[error("no vertex holds the requested value")]
    EndpointNotFound,
}

impl GraphError {
    pub(crate) const VERTEX: Self = GraphError::InvalidHandle(HandleKind::Vertex);
    pub(crate) const EDGE: Self = GraphError::InvalidHandle(HandleKind::Edge);
}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;
