use tracing::debug;

use crate::{
    crawler::{CrawlControl, CrawlObserver, DepthFirstCrawler},
    error::GraphError,
    graph::{Graph, GraphResult},
};

/// Counts the connected components of an undirected graph.
///
/// Every time the crawler has to pick a fresh, unreached vertex to continue,
/// a new component starts. `1` means the graph is connected, `0` that it is empty.
pub struct RootDetector<'g, G: Graph> {
    crawler: DepthFirstCrawler<'g, G>,
    roots: Vec<G::Vertex>,
}

struct RootCollector<V> {
    roots: Vec<V>,
}

impl<G: Graph> CrawlObserver<G> for RootCollector<G::Vertex> {
    fn on_root_detected(&mut self, _: &mut CrawlControl, root: &G::Vertex) -> GraphResult<(), G> {
        self.roots.push(root.clone());
        Ok(())
    }
}

impl<'g, G: Graph> RootDetector<'g, G> {
    /// Fails for directed graphs: counting roots there needs direction-aware
    /// bookkeeping this detector does not do.
    pub fn new(graph: &'g G) -> GraphResult<Self, G> {
        if graph.is_directed() {
            return Err(GraphError::DirectedGraph {
                algorithm: "root detection",
            });
        }
        Ok(RootDetector {
            crawler: DepthFirstCrawler::new(graph),
            roots: Vec::new(),
        })
    }

    /// Crawls the whole graph and returns the number of components.
    pub fn search_for_roots(&mut self) -> GraphResult<usize, G> {
        let mut collector = RootCollector { roots: Vec::new() };
        self.crawler.crawl(&mut collector)?;
        self.roots = collector.roots;
        debug!(roots = self.roots.len(), "root search finished");
        Ok(self.roots.len())
    }

    /// The vertex each component was entered through, in detection order.
    pub fn roots(&self) -> &[G::Vertex] {
        &self.roots
    }

    /// Runs a fresh search. An empty graph counts as connected.
    pub fn is_connected(&mut self) -> GraphResult<bool, G> {
        Ok(self.search_for_roots()? <= 1)
    }
}
