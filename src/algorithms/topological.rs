use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::{
    crawler::{CrawlControl, CrawlObserver, CycleResolution, DepthFirstCrawler},
    error::GraphError,
    graph::{Graph, GraphResult},
};

/// How a [`TopologicalSorter`] reads edges and treats cycles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortOptions {
    /// `false`: an edge `A -> B` means "A depends on B", so B comes first.
    /// `true`: an edge `A -> B` means "A comes before B".
    pub direction_means_order: bool,
    /// Drop every edge that would close a cycle instead of failing.
    ///
    /// Edges are dropped as the crawl runs into them, the first offending edge
    /// on each path. That is not a minimal set of edges to remove.
    pub see_cycle_creating_edges_as_non_existent: bool,
}

impl SortOptions {
    pub fn direction_means_order(mut self, direction_means_order: bool) -> Self {
        self.direction_means_order = direction_means_order;
        self
    }

    pub fn see_cycle_creating_edges_as_non_existent(mut self, ignore: bool) -> Self {
        self.see_cycle_creating_edges_as_non_existent = ignore;
        self
    }
}

/// Depth-first topological sort of a directed graph.
///
/// Vertices are emitted in post-order, so everything a vertex points to is
/// finished before the vertex itself.
pub struct TopologicalSorter<'g, G: Graph> {
    crawler: DepthFirstCrawler<'g, G>,
    options: SortOptions,
    results: Vec<G::Vertex>,
}

impl<'g, G: Graph> TopologicalSorter<'g, G> {
    pub fn new(graph: &'g G, options: SortOptions) -> GraphResult<Self, G> {
        if !graph.is_directed() {
            return Err(GraphError::UndirectedGraph {
                algorithm: "topological sort",
            });
        }
        Ok(TopologicalSorter {
            crawler: DepthFirstCrawler::new(graph).with_cycle_detection(true),
            options,
            results: Vec::new(),
        })
    }

    pub fn options(&self) -> SortOptions {
        self.options
    }

    pub fn set_see_cycle_creating_edges_as_non_existent(&mut self, ignore: bool) {
        self.options.see_cycle_creating_edges_as_non_existent = ignore;
    }

    /// Sorts the whole graph.
    ///
    /// Fails with [`GraphError::Cycle`] on the first back edge unless
    /// `see_cycle_creating_edges_as_non_existent` is set. On failure the
    /// previous results are cleared.
    pub fn sort(&mut self) -> GraphResult<&[G::Vertex], G> {
        self.results.clear();
        let mut collector = OrderCollector {
            order: VecDeque::new(),
            options: self.options,
            dropped: 0,
        };
        self.crawler.crawl(&mut collector)?;

        debug!(
            vertices = collector.order.len(),
            dropped_edges = collector.dropped,
            "topological sort finished"
        );
        self.results = collector.order.into();
        Ok(self.results.as_slice())
    }

    /// Result of the last successful [`sort`](Self::sort).
    pub fn sort_results(&self) -> &[G::Vertex] {
        &self.results
    }
}

struct OrderCollector<V> {
    order: VecDeque<V>,
    options: SortOptions,
    dropped: usize,
}

impl<G: Graph> CrawlObserver<G> for OrderCollector<G::Vertex> {
    fn on_visited(
        &mut self,
        _: &mut CrawlControl,
        vertex: &G::Vertex,
        _: &[G::Edge],
    ) -> GraphResult<(), G> {
        if self.options.direction_means_order {
            self.order.push_front(vertex.clone());
        } else {
            self.order.push_back(vertex.clone());
        }
        Ok(())
    }

    fn on_cycle_detected(
        &mut self,
        _: &mut CrawlControl,
        related: &G::Vertex,
        followed: &[G::Edge],
    ) -> GraphResult<CycleResolution, G> {
        if self.options.see_cycle_creating_edges_as_non_existent {
            trace!(?related, "ignoring cycle-creating edge");
            self.dropped += 1;
            Ok(CycleResolution::Ignore)
        } else {
            Err(GraphError::Cycle {
                vertex: related.clone(),
                edges: followed.to_vec(),
            })
        }
    }
}
