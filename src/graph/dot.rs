//! Building an [`AdjacencyGraph`] from Graphviz DOT text.
//!
//! Only the structure is read: `digraph` gives a directed graph, `graph` an
//! undirected one, every DOT node becomes a vertex labelled with its identifier
//! and every edge statement becomes an edge. The `label` attribute of an edge,
//! if any, is kept unquoted as the edge payload. Vertices are numbered in identifier
//! order and edges in `(from, to)` order, so the same text always yields the
//! same graph.

use std::collections::BTreeMap;

use itertools::Itertools;
use tracing::debug;

use crate::error::DotError;

use super::{AdjacencyGraph, Graph, VertexIndex};

impl AdjacencyGraph<String, Option<String>> {
    #[allow(clippy::result_large_err)]
    pub fn from_dot(s: impl AsRef<str>) -> Result<Self, DotError> {
        let ast_graph = dot_parser::ast::Graph::try_from(s.as_ref())?;
        let can_graph = dot_parser::canonical::Graph::from(
            ast_graph.filter_map(&|a| Some((a.0.to_string(), a.1.to_string()))),
        );

        let mut graph = AdjacencyGraph::new(can_graph.is_digraph);
        let mut map: BTreeMap<String, VertexIndex> = BTreeMap::new();

        let nodes = BTreeMap::from_iter(can_graph.nodes.set);
        for id in nodes.into_keys() {
            let index = graph.add_vertex(id.clone());
            map.insert(id, index);
        }

        for e in can_graph
            .edges
            .set
            .into_iter()
            .sorted_by(|a, b| Ord::cmp(&(&a.from, &a.to), &(&b.from, &b.to)))
        {
            let label = e
                .attr
                .into_iter()
                .find_map(|(key, value)| (key == "label").then(|| value.trim_matches('"').to_owned()));

            let start = vertex_for(&mut graph, &mut map, e.from);
            let end = vertex_for(&mut graph, &mut map, e.to);
            graph.push_edge(start, end, label);
        }

        debug!(
            vertices = graph.n_vertices(),
            edges = graph.n_edges(),
            directed = graph.is_directed(),
            "parsed DOT graph"
        );
        Ok(graph)
    }
}

fn vertex_for(
    graph: &mut AdjacencyGraph<String, Option<String>>,
    map: &mut BTreeMap<String, VertexIndex>,
    id: String,
) -> VertexIndex {
    *map.entry(id)
        .or_insert_with_key(|id| graph.add_vertex(id.clone()))
}

/// Builds an [`AdjacencyGraph`] from inline DOT, e.g. `dot!(digraph { A -> B })`.
///
/// Evaluates to `Result<AdjacencyGraph<String, Option<String>>, DotError>`.
#[macro_export]
macro_rules! dot {
    ($($t:tt)*) => {
        $crate::graph::AdjacencyGraph::from_dot(stringify!($($t)*))
    };
}
