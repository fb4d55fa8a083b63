use std::ops::Index;

use tracing::trace;

use crate::{define_indexed_vec, error::GraphError};

use super::{Graph, GraphEdge};

define_indexed_vec!(
    /// Position of a vertex inside an [`AdjacencyGraph`].
    pub struct VertexIndex;

    pub struct VertexVec;
);

define_indexed_vec!(
    /// Position of an edge inside an [`AdjacencyGraph`], in insertion order.
    pub struct EdgeIndex;

    pub struct EdgeVec;
);

/// Handle to an edge of an [`AdjacencyGraph`], as handed to the algorithms.
///
/// Two handles are equal exactly when they refer to the same stored edge, so
/// parallel edges between the same pair of vertices stay distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeRef {
    pub index: EdgeIndex,
    pub start: VertexIndex,
    pub end: VertexIndex,
}

impl GraphEdge<VertexIndex> for EdgeRef {
    fn start(&self) -> &VertexIndex {
        &self.start
    }

    fn end(&self) -> &VertexIndex {
        &self.end
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct StoredEdge<E> {
    start: VertexIndex,
    end: VertexIndex,
    data: E,
}

/// A graph stored as per-vertex lists of outgoing edges.
///
/// `V` is the payload of a vertex and `E` the payload of an edge. Whether the
/// graph is directed is chosen once, at construction. In an undirected graph an
/// edge is listed under both of its endpoints, so [`Graph::edges_from`] returns
/// every incident edge.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacencyGraph<V, E> {
    directed: bool,
    vertices: VertexVec<V>,
    edges: EdgeVec<StoredEdge<E>>,
    adjacency: VertexVec<Vec<EdgeIndex>>,
}

impl<V, E> AdjacencyGraph<V, E> {
    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn new(directed: bool) -> Self {
        AdjacencyGraph {
            directed,
            vertices: VertexVec::new(),
            edges: EdgeVec::new(),
            adjacency: VertexVec::new(),
        }
    }

    pub fn add_vertex(&mut self, data: V) -> VertexIndex {
        self.adjacency.push(Vec::new());
        self.vertices.push(data)
    }

    /// Connects `start` to `end`.
    ///
    /// Both vertices have to exist already; parallel edges and self-loops are allowed.
    pub fn add_edge(
        &mut self,
        start: VertexIndex,
        end: VertexIndex,
        data: E,
    ) -> Result<EdgeIndex, GraphError<VertexIndex, EdgeRef>> {
        for v in [start, end] {
            if v.0 >= self.vertices.len() {
                return Err(GraphError::VertexOutOfRange {
                    index: v.0,
                    len: self.vertices.len(),
                });
            }
        }

        Ok(self.push_edge(start, end, data))
    }

    /// Stores an edge between two vertices known to exist.
    pub(super) fn push_edge(&mut self, start: VertexIndex, end: VertexIndex, data: E) -> EdgeIndex {
        let index = self.edges.push(StoredEdge { start, end, data });
        self.adjacency[start].push(index);
        if !self.directed && start != end {
            self.adjacency[end].push(index);
        }
        trace!(%index, %start, %end, "added edge");
        index
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, index: EdgeIndex) -> Option<EdgeRef> {
        self.edges.get(index).map(|e| EdgeRef {
            index,
            start: e.start,
            end: e.end,
        })
    }

    pub fn edge_data(&self, edge: &EdgeRef) -> Option<&E> {
        self.edges.get(edge.index).map(|e| &e.data)
    }

    pub fn iter_vertices(&self) -> impl Iterator<Item = (VertexIndex, &V)> + '_ {
        self.vertices.iter()
    }

    pub fn iter_edges(&self) -> impl Iterator<Item = (EdgeRef, &E)> + '_ {
        self.edges.iter().map(|(index, e)| {
            (
                EdgeRef {
                    index,
                    start: e.start,
                    end: e.end,
                },
                &e.data,
            )
        })
    }

    pub fn find_vertex(&self, mut pred: impl FnMut(&V) -> bool) -> Option<VertexIndex> {
        self.vertices.iter().find(|(_, v)| pred(v)).map(|(i, _)| i)
    }
}

impl<V: AsRef<str>, E> AdjacencyGraph<V, E> {
    pub fn vertex_by_label(&self, label: &str) -> Option<VertexIndex> {
        self.find_vertex(|v| v.as_ref() == label)
    }

    /// Labels of `vertices`, in the order given. Unknown indices are skipped.
    pub fn labels<'a, 'v>(
        &'a self,
        vertices: impl IntoIterator<Item = &'v VertexIndex>,
    ) -> Vec<&'a str> {
        vertices
            .into_iter()
            .filter_map(|v| self.vertices.get(*v))
            .map(|v| v.as_ref())
            .collect()
    }
}

impl<V, E> Index<VertexIndex> for AdjacencyGraph<V, E> {
    type Output = V;
    fn index(&self, index: VertexIndex) -> &Self::Output {
        &self.vertices[index]
    }
}

impl<V, E> Index<EdgeIndex> for AdjacencyGraph<V, E> {
    type Output = E;
    fn index(&self, index: EdgeIndex) -> &Self::Output {
        &self.edges[index].data
    }
}

impl<V, E> Graph for AdjacencyGraph<V, E> {
    type Vertex = VertexIndex;
    type Edge = EdgeRef;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertices(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.vertices.indices()
    }

    fn edges_from(&self, vertex: &VertexIndex) -> impl Iterator<Item = EdgeRef> + '_ {
        self.adjacency
            .get(*vertex)
            .into_iter()
            .flatten()
            .filter_map(|&e| self.edge(e))
    }

    fn contains_vertex(&self, vertex: &VertexIndex) -> bool {
        vertex.0 < self.vertices.len()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}
