//! Error types shared by the graph algorithms and the priority queues.

use dot_parser::ast::PestError;
use thiserror::Error;

/// Failure of a graph algorithm.
///
/// `V` and `E` are the vertex and edge types of the graph the algorithm ran on,
/// so that a failure can point at the exact vertex and edges involved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<V, E> {
    /// The algorithm requires an undirected graph.
    #[error("{algorithm}: this algorithm can't be used on a directed graph")]
    DirectedGraph { algorithm: &'static str },

    /// The algorithm requires a directed graph.
    #[error("{algorithm}: this algorithm can't be used on an undirected graph")]
    UndirectedGraph { algorithm: &'static str },

    #[error("vertex {0:?} is not part of the graph")]
    UnknownVertex(V),

    #[error("vertex index {index} is out of range for a graph with {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },

    /// A back edge was found while a cycle-free graph was required.
    ///
    /// `edges` holds the edges followed from the traversal root down to the
    /// vertex that closed the cycle, the closing edge(s) last. A step taken
    /// over parallel edges contributes all of them, so `edges` is not
    /// necessarily a simple chain.
    #[error(
        "cycle detected: vertex {vertex:?} was reached again by following {edges:?}; \
         a topological order is undefined for a cyclic graph"
    )]
    Cycle { vertex: V, edges: Vec<E> },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// Walking a binary heap in priority order means extracting every element,
    /// which would empty the queue under the caller's feet.
    #[error("a binary-heap backed priority queue can't be enumerated")]
    EnumerationUnsupported,
}

#[derive(Error, Debug)]
pub enum DotError {
    #[error("invalid DOT input: {0}")]
    Parse(#[from] PestError),
}
