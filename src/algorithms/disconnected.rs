use indexmap::IndexSet;
use tracing::debug;

use crate::{
    crawler::{CrawlControl, CrawlObserver, DepthFirstCrawler},
    error::GraphError,
    graph::{Graph, GraphResult},
};

/// A subset of the vertices and edges of a main graph.
///
/// The view owns no graph data: it only records which vertices and edges of
/// `main` belong to it, in the order they were added. A view is itself a
/// [`Graph`] whose [`edges_from`](Graph::edges_from) only reports member edges,
/// so it can be crawled like any other graph.
#[derive(Debug, Clone)]
pub struct SubGraphView<'g, G: Graph> {
    main: &'g G,
    name: Option<String>,
    vertices: IndexSet<G::Vertex>,
    edges: IndexSet<G::Edge>,
}

impl<'g, G: Graph> SubGraphView<'g, G> {
    pub fn new(main: &'g G) -> Self {
        SubGraphView {
            main,
            name: None,
            vertices: IndexSet::new(),
            edges: IndexSet::new(),
        }
    }

    pub fn named(main: &'g G, name: impl Into<String>) -> Self {
        SubGraphView {
            name: Some(name.into()),
            ..Self::new(main)
        }
    }

    pub fn main(&self) -> &'g G {
        self.main
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn contains_edge(&self, edge: &G::Edge) -> bool {
        self.edges.contains(edge)
    }

    pub fn edges(&self) -> impl Iterator<Item = &G::Edge> + '_ {
        self.edges.iter()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn add_vertex(&mut self, vertex: G::Vertex) -> bool {
        self.vertices.insert(vertex)
    }

    /// Pulls every edge leaving a member vertex from the main graph.
    ///
    /// A depth-first walk does not report edges towards already visited
    /// vertices, so the edge set is rebuilt from the main graph once membership
    /// is final.
    pub(crate) fn collect_edges(&mut self) {
        let main = self.main;
        for vertex in &self.vertices {
            self.edges.extend(main.edges_from(vertex));
        }
    }
}

impl<G: Graph> Graph for SubGraphView<'_, G> {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn is_directed(&self) -> bool {
        self.main.is_directed()
    }

    fn vertices(&self) -> impl Iterator<Item = G::Vertex> + '_ {
        self.vertices.iter().cloned()
    }

    fn edges_from(&self, vertex: &G::Vertex) -> impl Iterator<Item = G::Edge> + '_ {
        self.main
            .edges_from(vertex)
            .filter(move |e| self.edges.contains(e))
    }

    fn contains_vertex(&self, vertex: &G::Vertex) -> bool {
        self.vertices.contains(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Splits an undirected graph into its connected components.
///
/// Every time the crawl starts a new root, `factory` produces a fresh
/// [`SubGraphView`] and every vertex visited from then on joins it. Edges are
/// added afterwards from the main graph, so a view holds exactly the edges
/// with both endpoints inside it.
pub struct DisconnectedGraphFinder<'g, G: Graph, F = fn(&'g G) -> SubGraphView<'g, G>> {
    graph: &'g G,
    crawler: DepthFirstCrawler<'g, G>,
    factory: F,
}

impl<'g, G: Graph> DisconnectedGraphFinder<'g, G> {
    pub fn new(graph: &'g G) -> GraphResult<Self, G> {
        Self::with_factory(graph, SubGraphView::new)
    }
}

impl<'g, G, F> DisconnectedGraphFinder<'g, G, F>
where
    G: Graph,
    F: FnMut(&'g G) -> SubGraphView<'g, G>,
{
    /// Uses `factory` to create the view for each component found.
    pub fn with_factory(graph: &'g G, factory: F) -> GraphResult<Self, G> {
        if graph.is_directed() {
            return Err(GraphError::DirectedGraph {
                algorithm: "disconnected graph search",
            });
        }
        Ok(DisconnectedGraphFinder {
            graph,
            crawler: DepthFirstCrawler::new(graph),
            factory,
        })
    }

    /// One view per component, in the order the components were reached.
    pub fn find_disconnected_graphs(&mut self) -> GraphResult<Vec<SubGraphView<'g, G>>, G> {
        let mut collector = ComponentCollector {
            graph: self.graph,
            factory: &mut self.factory,
            stop_after_first: false,
            views: Vec::new(),
        };
        self.crawler.crawl(&mut collector)?;
        Ok(Self::finish(collector.views))
    }

    /// Starts at `start`; with `stop_after_first` only the component of
    /// `start` is returned, otherwise it comes first and the rest follow.
    pub fn find_disconnected_graphs_from(
        &mut self,
        start: G::Vertex,
        stop_after_first: bool,
    ) -> GraphResult<Vec<SubGraphView<'g, G>>, G> {
        let mut collector = ComponentCollector {
            graph: self.graph,
            factory: &mut self.factory,
            stop_after_first,
            views: Vec::new(),
        };
        self.crawler.crawl_seeded(start, &mut collector)?;
        Ok(Self::finish(collector.views))
    }

    fn finish(mut views: Vec<SubGraphView<'g, G>>) -> Vec<SubGraphView<'g, G>> {
        for view in &mut views {
            view.collect_edges();
        }
        debug!(components = views.len(), "disconnected graph search finished");
        views
    }
}

struct ComponentCollector<'g, 'f, G: Graph, F> {
    graph: &'g G,
    factory: &'f mut F,
    stop_after_first: bool,
    views: Vec<SubGraphView<'g, G>>,
}

impl<'g, G, F> CrawlObserver<G> for ComponentCollector<'g, '_, G, F>
where
    G: Graph,
    F: FnMut(&'g G) -> SubGraphView<'g, G>,
{
    fn on_root_detected(&mut self, ctl: &mut CrawlControl, _: &G::Vertex) -> GraphResult<(), G> {
        if self.stop_after_first && !self.views.is_empty() {
            ctl.abort();
            return Ok(());
        }
        let view = (self.factory)(self.graph);
        self.views.push(view);
        Ok(())
    }

    fn on_visiting(
        &mut self,
        _: &mut CrawlControl,
        vertex: &G::Vertex,
        _: &[G::Edge],
    ) -> GraphResult<(), G> {
        if let Some(current) = self.views.last_mut() {
            current.add_vertex(vertex.clone());
        }
        Ok(())
    }
}
