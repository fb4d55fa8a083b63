//! # crawlgraph
//!
//! A depth-first traversal engine with pluggable observers, and the graph
//! algorithms built on it:
//!
//! - [`crawler`]: the [`DepthFirstCrawler`] and the [`CrawlObserver`] hooks it fires.
//! - [`algorithms::roots`]: traversal roots of an undirected graph.
//! - [`algorithms::disconnected`]: splitting an undirected graph into its
//!   connected components, each one a [`SubGraphView`].
//! - [`algorithms::topological`]: topological order of a directed graph, with
//!   cycle reporting or cycle tolerance.
//! - [`priority_queue`]: a max-priority queue over three backing stores.
//!
//! Algorithms consume any type implementing [`Graph`]. [`AdjacencyGraph`] is
//! the store shipped with the crate and can be read from DOT:
//!
//! ```
//! use crawlgraph::{dot, SortOptions, TopologicalSorter};
//!
//! let graph = dot!(digraph { A -> B B -> C }).unwrap();
//! let mut sorter = TopologicalSorter::new(&graph, SortOptions::default()).unwrap();
//! let order = sorter.sort().unwrap();
//! assert_eq!(graph.labels(order), vec!["C", "B", "A"]);
//! ```

pub mod algorithms;
pub mod crawler;
pub mod error;
pub mod graph;
pub mod priority_queue;

pub use algorithms::{
    DisconnectedGraphFinder, RootDetector, SortOptions, SubGraphView, TopologicalSorter,
};
pub use crawler::{CrawlControl, CrawlObserver, CrawlOutcome, CycleResolution, DepthFirstCrawler};
pub use error::{DotError, GraphError, QueueError};
pub use graph::{AdjacencyGraph, Graph, GraphEdge, GraphResult};
pub use priority_queue::{
    BinaryHeapPriorityQueue, PriorityQueue, SortedListPriorityQueue, UnsortedListPriorityQueue,
};
