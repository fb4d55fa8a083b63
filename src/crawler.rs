//! # Depth-first crawling
//!
//! [`DepthFirstCrawler`] walks a [`Graph`] depth first and reports what it does
//! to a [`CrawlObserver`]. The crawler owns the bookkeeping (visited set, the
//! current path, cycle checks); the observer decides what the walk means. The
//! algorithms in [`crate::algorithms`] are nothing more than observers.
//!
//! ## Visitation protocol
//!
//! For every traversal root, in graph vertex order:
//!
//! 1. [`on_root_detected`](CrawlObserver::on_root_detected) fires for the root.
//! 2. [`on_visiting`](CrawlObserver::on_visiting) fires for a vertex right after it is
//!    marked visited and before any neighbour is explored. The edges passed in are
//!    the ones used to reach it; they are empty exactly for a root.
//! 3. Neighbours are explored one related vertex at a time, in edge order. Parallel
//!    edges to the same related vertex are grouped and handed over together.
//! 4. With cycle detection on, reaching a vertex that is still on the current path
//!    fires [`on_cycle_detected`](CrawlObserver::on_cycle_detected).
//! 5. [`on_visited`](CrawlObserver::on_visited) fires once every neighbour has been
//!    handled (post-order).
//!
//! A vertex is never entered twice within one crawl, self-loops and converging
//! paths included. Any hook may call [`CrawlControl::abort`]; the crawler then
//! unwinds without firing further hooks and reports [`CrawlOutcome::Aborted`].
//! Any hook may also fail, which ends the crawl with that error.
//!
//! The walk uses an explicit stack, so graph depth is not bounded by the call stack.

use ahash::AHashSet;
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{
    error::GraphError,
    graph::{Graph, GraphEdge, GraphResult},
};

/// What to do with an edge that closes a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleResolution {
    /// Accept the edge. The related vertex is already visited and is never
    /// entered again, so the walk itself goes on exactly as with `Ignore`; only
    /// the observer's own bookkeeping can tell the two apart.
    Follow,
    /// Pretend the edge does not exist.
    #[default]
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlOutcome {
    /// Every vertex in scope was visited.
    Completed,
    /// A hook called [`CrawlControl::abort`].
    Aborted,
}

/// Handed to every hook; carries the abort flag of the running crawl.
#[derive(Debug, Default)]
pub struct CrawlControl {
    aborted: bool,
}

impl CrawlControl {
    /// Stops the crawl once the current hook returns.
    pub fn abort(&mut self) {
        self.aborted = true;
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted
    }
}

/// Receives the events of a [`DepthFirstCrawler`] run.
///
/// Every hook has a do-nothing default, so an observer only implements what it
/// needs. By default a cycle edge is ignored.
#[allow(unused_variables)]
pub trait CrawlObserver<G: Graph> {
    /// A vertex nobody has reached yet starts a new traversal.
    fn on_root_detected(&mut self, ctl: &mut CrawlControl, root: &G::Vertex) -> GraphResult<(), G> {
        Ok(())
    }

    fn on_visiting(
        &mut self,
        ctl: &mut CrawlControl,
        vertex: &G::Vertex,
        incoming: &[G::Edge],
    ) -> GraphResult<(), G> {
        Ok(())
    }

    fn on_visited(
        &mut self,
        ctl: &mut CrawlControl,
        vertex: &G::Vertex,
        incoming: &[G::Edge],
    ) -> GraphResult<(), G> {
        Ok(())
    }

    /// Only fired when cycle detection is enabled.
    ///
    /// `related` is the vertex on the current path that was reached again and
    /// `followed` the edges taken from the root down to it, the closing edge(s) last.
    fn on_cycle_detected(
        &mut self,
        ctl: &mut CrawlControl,
        related: &G::Vertex,
        followed: &[G::Edge],
    ) -> GraphResult<CycleResolution, G> {
        Ok(CycleResolution::Ignore)
    }
}

struct Frame<V, E> {
    vertex: V,
    incoming: Vec<E>,
    pending: indexmap::map::IntoIter<V, Vec<E>>,
}

/// Depth-first walker over a borrowed graph.
///
/// The per-run state lives in the crawler and is reset at the start of every
/// crawl; `&mut self` on the crawl methods keeps a run from being re-entered.
pub struct DepthFirstCrawler<'g, G: Graph> {
    graph: &'g G,
    detect_cycles: bool,
    visited: AHashSet<G::Vertex>,
    on_path: AHashSet<G::Vertex>,
    stack: Vec<Frame<G::Vertex, G::Edge>>,
    ctl: CrawlControl,
}

impl<'g, G: Graph> DepthFirstCrawler<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        DepthFirstCrawler {
            graph,
            detect_cycles: false,
            visited: AHashSet::new(),
            on_path: AHashSet::new(),
            stack: Vec::new(),
            ctl: CrawlControl::default(),
        }
    }

    /// Enables or disables back-edge detection.
    ///
    /// Only meaningful on directed graphs: in an undirected graph every edge
    /// leads back to the vertex it was reached from.
    pub fn with_cycle_detection(mut self, detect_cycles: bool) -> Self {
        self.detect_cycles = detect_cycles;
        self
    }

    /// Whether `vertex` was reached by the last crawl.
    pub fn is_visited(&self, vertex: &G::Vertex) -> bool {
        self.visited.contains(vertex)
    }

    /// Visits every vertex of the graph, component after component.
    pub fn crawl<O: CrawlObserver<G>>(&mut self, observer: &mut O) -> GraphResult<CrawlOutcome, G> {
        self.reset();
        let result = self.crawl_remaining(observer);
        self.finish(result)
    }

    /// Visits only the vertices reachable from `start`.
    pub fn crawl_from<O: CrawlObserver<G>>(
        &mut self,
        start: G::Vertex,
        observer: &mut O,
    ) -> GraphResult<CrawlOutcome, G> {
        self.check_start(&start)?;
        self.reset();
        let result = self.crawl_root(start, observer);
        self.finish(result)
    }

    /// Visits the component of `start` first, then every other component.
    pub fn crawl_seeded<O: CrawlObserver<G>>(
        &mut self,
        start: G::Vertex,
        observer: &mut O,
    ) -> GraphResult<CrawlOutcome, G> {
        self.check_start(&start)?;
        self.reset();
        let result = self
            .crawl_root(start, observer)
            .and_then(|()| self.crawl_remaining(observer));
        self.finish(result)
    }

    fn check_start(&self, start: &G::Vertex) -> GraphResult<(), G> {
        if self.graph.contains_vertex(start) {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex(start.clone()))
        }
    }

    fn reset(&mut self) {
        self.visited.clear();
        self.on_path.clear();
        self.stack.clear();
        self.ctl = CrawlControl::default();
    }

    fn finish(&mut self, result: GraphResult<(), G>) -> GraphResult<CrawlOutcome, G> {
        self.stack.clear();
        self.on_path.clear();
        result?;

        let outcome = if self.ctl.is_aborted() {
            CrawlOutcome::Aborted
        } else {
            CrawlOutcome::Completed
        };
        debug!(visited = self.visited.len(), ?outcome, "crawl finished");
        Ok(outcome)
    }

    fn crawl_remaining<O: CrawlObserver<G>>(&mut self, observer: &mut O) -> GraphResult<(), G> {
        let graph = self.graph;
        for vertex in graph.vertices() {
            if self.ctl.is_aborted() {
                break;
            }
            if !self.visited.contains(&vertex) {
                self.crawl_root(vertex, observer)?;
            }
        }
        Ok(())
    }

    fn crawl_root<O: CrawlObserver<G>>(
        &mut self,
        root: G::Vertex,
        observer: &mut O,
    ) -> GraphResult<(), G> {
        trace!(?root, "root detected");
        observer.on_root_detected(&mut self.ctl, &root)?;
        if self.ctl.is_aborted() {
            return Ok(());
        }

        self.enter(root, Vec::new(), observer)?;

        while !self.ctl.is_aborted() {
            let Some(frame) = self.stack.last_mut() else {
                break;
            };

            match frame.pending.next() {
                Some((related, edges)) => {
                    if self.detect_cycles && self.on_path.contains(&related) {
                        let followed = self.followed_edges(&edges);
                        let resolution =
                            observer.on_cycle_detected(&mut self.ctl, &related, &followed)?;
                        trace!(?related, ?resolution, "cycle detected");
                        if resolution == CycleResolution::Ignore || self.ctl.is_aborted() {
                            continue;
                        }
                    }
                    if !self.visited.contains(&related) {
                        self.enter(related, edges, observer)?;
                    }
                }
                None => {
                    let Some(frame) = self.stack.pop() else {
                        break;
                    };
                    self.on_path.remove(&frame.vertex);
                    trace!(vertex = ?frame.vertex, "visited");
                    observer.on_visited(&mut self.ctl, &frame.vertex, &frame.incoming)?;
                }
            }
        }
        Ok(())
    }

    /// Marks `vertex` visited, announces it and pushes its neighbourhood.
    fn enter<O: CrawlObserver<G>>(
        &mut self,
        vertex: G::Vertex,
        incoming: Vec<G::Edge>,
        observer: &mut O,
    ) -> GraphResult<(), G> {
        self.visited.insert(vertex.clone());
        self.on_path.insert(vertex.clone());
        trace!(?vertex, "visiting");
        observer.on_visiting(&mut self.ctl, &vertex, &incoming)?;

        let mut related: IndexMap<G::Vertex, Vec<G::Edge>> = IndexMap::new();
        for edge in self.graph.edges_from(&vertex) {
            let other = edge.opposite(&vertex).clone();
            related.entry(other).or_default().push(edge);
        }

        self.stack.push(Frame {
            vertex,
            incoming,
            pending: related.into_iter(),
        });
        Ok(())
    }

    /// Edges from the current root down to the top of the stack, then `closing`.
    fn followed_edges(&self, closing: &[G::Edge]) -> Vec<G::Edge> {
        self.stack
            .iter()
            .flat_map(|frame| frame.incoming.iter())
            .chain(closing)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod test;
