//! Internal traversal building blocks.
//!
//! `pub(crate)` so traversals can share scratch structures without exposing
//! them as part of the public API surface.

pub(crate) mod visited;
