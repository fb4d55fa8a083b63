//! # The graph contract
//!
//! The algorithms in this crate never own or build graphs. They consume them
//! through the [`Graph`] trait, which only asks for three things:
//!
//! - whether the graph is directed (a flag that must never change),
//! - the vertices, in a stable order,
//! - for a vertex, the edges leading away from it. For an undirected graph
//!   that is every edge touching the vertex.
//!
//! [`AdjacencyGraph`] is the in-memory implementation shipped with the crate;
//! [`SubGraphView`](crate::algorithms::disconnected::SubGraphView) implements the
//! contract as well, so a component found by one algorithm can be fed to another.

use std::{fmt::Debug, hash::Hash};

use crate::error::GraphError;

pub mod adjacency;
pub mod dot;
pub mod typed_vec;

pub use adjacency::{AdjacencyGraph, EdgeIndex, EdgeRef, VertexIndex};

/// Result of a graph algorithm running on `G`.
pub type GraphResult<T, G> = Result<T, GraphError<<G as Graph>::Vertex, <G as Graph>::Edge>>;

/// An edge as seen by the algorithms: two endpoints and nothing else.
pub trait GraphEdge<V: PartialEq> {
    fn start(&self) -> &V;

    fn end(&self) -> &V;

    /// The endpoint that is not `vertex`.
    ///
    /// For a directed edge leaving `vertex` this is [`end`](GraphEdge::end); for
    /// an undirected edge it is whichever side `vertex` is not on. A self-loop
    /// returns `vertex` itself.
    fn opposite(&self, vertex: &V) -> &V {
        if self.start() == vertex {
            self.end()
        } else {
            self.start()
        }
    }

    fn is_self_loop(&self) -> bool {
        self.start() == self.end()
    }
}

pub trait Graph {
    type Vertex: Clone + Eq + Hash + Debug;
    type Edge: GraphEdge<Self::Vertex> + Clone + Eq + Hash + Debug;

    fn is_directed(&self) -> bool;

    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    /// Edges leaving `vertex`. A vertex that is not part of the graph has none.
    fn edges_from(&self, vertex: &Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_;

    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool {
        self.vertices().any(|v| &v == vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}
