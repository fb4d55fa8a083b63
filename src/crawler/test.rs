use super::*;
use crate::{
    dot,
    graph::{AdjacencyGraph, EdgeRef, VertexIndex},
};

type DotGraph = AdjacencyGraph<String, Option<String>>;

struct Recorder<'a> {
    graph: &'a DotGraph,
    events: Vec<String>,
    abort_on_visiting: Option<&'static str>,
    cycles: Vec<(String, Vec<EdgeRef>)>,
    resolution: CycleResolution,
}

impl<'a> Recorder<'a> {
    fn new(graph: &'a DotGraph) -> Self {
        Recorder {
            graph,
            events: Vec::new(),
            abort_on_visiting: None,
            cycles: Vec::new(),
            resolution: CycleResolution::Ignore,
        }
    }

    fn label(&self, v: &VertexIndex) -> &'a str {
        &self.graph[*v]
    }
}

impl CrawlObserver<DotGraph> for Recorder<'_> {
    fn on_root_detected(&mut self, _: &mut CrawlControl, root: &VertexIndex) -> GraphResult<(), DotGraph> {
        self.events.push(format!("root {}", self.label(root)));
        Ok(())
    }

    fn on_visiting(
        &mut self,
        ctl: &mut CrawlControl,
        vertex: &VertexIndex,
        incoming: &[EdgeRef],
    ) -> GraphResult<(), DotGraph> {
        self.events
            .push(format!("visiting {} ({})", self.label(vertex), incoming.len()));
        if self.abort_on_visiting == Some(self.label(vertex)) {
            ctl.abort();
        }
        Ok(())
    }

    fn on_visited(
        &mut self,
        _: &mut CrawlControl,
        vertex: &VertexIndex,
        _: &[EdgeRef],
    ) -> GraphResult<(), DotGraph> {
        self.events.push(format!("visited {}", self.label(vertex)));
        Ok(())
    }

    fn on_cycle_detected(
        &mut self,
        _: &mut CrawlControl,
        related: &VertexIndex,
        followed: &[EdgeRef],
    ) -> GraphResult<CycleResolution, DotGraph> {
        self.cycles
            .push((self.label(related).to_owned(), followed.to_vec()));
        Ok(self.resolution)
    }
}

#[test]
fn visiting_order_is_depth_first() {
    let graph = dot!(digraph {
        A -> B
        A -> C
        B -> D
        C -> D
    })
    .unwrap();

    let mut recorder = Recorder::new(&graph);
    let outcome = DepthFirstCrawler::new(&graph).crawl(&mut recorder).unwrap();

    assert_eq!(outcome, CrawlOutcome::Completed);
    similar_asserts::assert_eq!(
        recorder.events,
        vec![
            "root A",
            "visiting A (0)",
            "visiting B (1)",
            "visiting D (1)",
            "visited D",
            "visited B",
            "visiting C (1)",
            "visited C",
            "visited A",
        ]
    );
}

#[test]
fn every_component_gets_its_own_root() {
    let graph = DotGraph::from_dot("graph { A -- B; C -- D; E }").unwrap();

    let mut recorder = Recorder::new(&graph);
    let mut crawler = DepthFirstCrawler::new(&graph);
    crawler.crawl(&mut recorder).unwrap();

    let roots: Vec<_> = recorder
        .events
        .iter()
        .filter(|e| e.starts_with("root"))
        .collect();
    assert_eq!(roots, vec!["root A", "root C", "root E"]);

    let visits = recorder
        .events
        .iter()
        .filter(|e| e.starts_with("visiting"))
        .count();
    assert_eq!(visits, 5);
    assert!(graph.vertices().all(|v| crawler.is_visited(&v)));
}

#[test]
fn crawl_from_stays_in_the_start_component() {
    let graph = DotGraph::from_dot("graph { A -- B; C -- D }").unwrap();
    let c = graph.vertex_by_label("C").unwrap();

    let mut recorder = Recorder::new(&graph);
    let mut crawler = DepthFirstCrawler::new(&graph);
    crawler.crawl_from(c, &mut recorder).unwrap();

    assert_eq!(
        recorder.events,
        vec!["root C", "visiting C (0)", "visiting D (1)", "visited D", "visited C"]
    );
    assert!(!crawler.is_visited(&graph.vertex_by_label("A").unwrap()));
}

#[test]
fn crawl_seeded_starts_with_the_given_vertex() {
    let graph = DotGraph::from_dot("graph { A -- B; C -- D }").unwrap();
    let d = graph.vertex_by_label("D").unwrap();

    let mut recorder = Recorder::new(&graph);
    DepthFirstCrawler::new(&graph)
        .crawl_seeded(d, &mut recorder)
        .unwrap();

    let roots: Vec<_> = recorder
        .events
        .iter()
        .filter(|e| e.starts_with("root"))
        .collect();
    assert_eq!(roots, vec!["root D", "root A"]);
}

#[test]
fn unknown_start_vertex_is_rejected() {
    let graph = DotGraph::from_dot("graph { A -- B }").unwrap();
    let mut recorder = Recorder::new(&graph);

    let err = DepthFirstCrawler::new(&graph)
        .crawl_from(VertexIndex(7), &mut recorder)
        .unwrap_err();

    assert_eq!(err, GraphError::UnknownVertex(VertexIndex(7)));
    assert!(recorder.events.is_empty());
}

#[test]
fn abort_unwinds_without_further_hooks() {
    let graph = dot!(digraph {
        A -> B
        B -> C
        D -> E
    })
    .unwrap();

    let mut recorder = Recorder::new(&graph);
    recorder.abort_on_visiting = Some("B");
    let outcome = DepthFirstCrawler::new(&graph).crawl(&mut recorder).unwrap();

    assert_eq!(outcome, CrawlOutcome::Aborted);
    assert_eq!(recorder.events, vec!["root A", "visiting A (0)", "visiting B (1)"]);
}

#[test]
fn crawler_state_resets_between_runs() {
    let graph = dot!(digraph { A -> B }).unwrap();
    let mut crawler = DepthFirstCrawler::new(&graph);

    let mut first = Recorder::new(&graph);
    first.abort_on_visiting = Some("A");
    assert_eq!(crawler.crawl(&mut first).unwrap(), CrawlOutcome::Aborted);

    let mut second = Recorder::new(&graph);
    assert_eq!(crawler.crawl(&mut second).unwrap(), CrawlOutcome::Completed);
    assert_eq!(second.events.len(), 5);
}

#[test]
fn back_edges_are_reported_with_the_followed_path() {
    let graph = dot!(digraph {
        A -> B
        B -> C
        C -> A
    })
    .unwrap();

    let mut recorder = Recorder::new(&graph);
    DepthFirstCrawler::new(&graph)
        .with_cycle_detection(true)
        .crawl(&mut recorder)
        .unwrap();

    assert_eq!(recorder.cycles.len(), 1);
    let (related, followed) = &recorder.cycles[0];
    assert_eq!(related, "A");
    let path: Vec<_> = followed
        .iter()
        .map(|e| format!("{}->{}", graph[e.start], graph[e.end]))
        .collect();
    assert_eq!(path, vec!["A->B", "B->C", "C->A"]);

    // The cycle edge is skipped, everything is still visited exactly once.
    let visits = recorder
        .events
        .iter()
        .filter(|e| e.starts_with("visiting"))
        .count();
    assert_eq!(visits, 3);
}

#[test]
fn following_a_cycle_edge_never_reenters_a_vertex() {
    let graph = dot!(digraph {
        A -> B
        B -> A
        B -> B
    })
    .unwrap();

    let mut recorder = Recorder::new(&graph);
    recorder.resolution = CycleResolution::Follow;
    DepthFirstCrawler::new(&graph)
        .with_cycle_detection(true)
        .crawl(&mut recorder)
        .unwrap();

    assert_eq!(recorder.cycles.len(), 2);
    assert_eq!(
        recorder.events,
        vec!["root A", "visiting A (0)", "visiting B (1)", "visited B", "visited A"]
    );

    let mut ignoring = Recorder::new(&graph);
    DepthFirstCrawler::new(&graph)
        .with_cycle_detection(true)
        .crawl(&mut ignoring)
        .unwrap();
    assert_eq!(ignoring.events, recorder.events);
    assert_eq!(ignoring.cycles, recorder.cycles);
}

#[test]
fn converging_paths_are_not_cycles() {
    let graph = dot!(digraph {
        A -> B
        A -> C
        B -> D
        C -> D
    })
    .unwrap();

    let mut recorder = Recorder::new(&graph);
    DepthFirstCrawler::new(&graph)
        .with_cycle_detection(true)
        .crawl(&mut recorder)
        .unwrap();

    assert!(recorder.cycles.is_empty());
}

#[test]
fn parallel_edges_arrive_together() {
    let graph = dot!(digraph {
        A -> B [label = "first"]
        A -> B [label = "second"]
    })
    .unwrap();

    let mut recorder = Recorder::new(&graph);
    DepthFirstCrawler::new(&graph).crawl(&mut recorder).unwrap();

    assert!(recorder.events.contains(&"visiting B (2)".to_owned()));
}

#[test]
fn hook_failures_end_the_crawl() {
    struct Refuse;
    impl CrawlObserver<DotGraph> for Refuse {
        fn on_visited(
            &mut self,
            _: &mut CrawlControl,
            vertex: &VertexIndex,
            _: &[EdgeRef],
        ) -> GraphResult<(), DotGraph> {
            Err(GraphError::UnknownVertex(*vertex))
        }
    }

    let graph = dot!(digraph { A -> B }).unwrap();
    let err = DepthFirstCrawler::new(&graph).crawl(&mut Refuse).unwrap_err();
    assert_eq!(err, GraphError::UnknownVertex(graph.vertex_by_label("B").unwrap()));
}

#[test]
fn long_chains_do_not_exhaust_the_stack() {
    let mut graph: AdjacencyGraph<usize, ()> = AdjacencyGraph::directed();
    let mut previous = graph.add_vertex(0);
    for i in 1..200_000 {
        let next = graph.add_vertex(i);
        graph.add_edge(previous, next, ()).unwrap();
        previous = next;
    }

    struct Count(usize);
    impl CrawlObserver<AdjacencyGraph<usize, ()>> for Count {
        fn on_visited(
            &mut self,
            _: &mut CrawlControl,
            _: &VertexIndex,
            _: &[EdgeRef],
        ) -> GraphResult<(), AdjacencyGraph<usize, ()>> {
            self.0 += 1;
            Ok(())
        }
    }

    let mut count = Count(0);
    DepthFirstCrawler::new(&graph)
        .with_cycle_detection(true)
        .crawl(&mut count)
        .unwrap();
    assert_eq!(count.0, 200_000);
}
