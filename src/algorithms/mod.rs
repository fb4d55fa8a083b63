//! # Graph algorithms built on the depth-first crawler
//!
//! Each algorithm is a [`CrawlObserver`](crate::crawler::CrawlObserver) plus a thin
//! wrapper that checks the graph is of the right kind before anything is crawled.
//!
//! ## Available Algorithms
//!
//! ### Connectivity (undirected graphs)
//! - [`roots`]: counts the disjoint components of a graph
//! - [`disconnected`]: materializes every component as a [`SubGraphView`](disconnected::SubGraphView)
//!
//! ### Ordering (directed graphs)
//! - [`topological`]: depth-first topological sort with configurable cycle handling

pub mod disconnected;
pub mod roots;
pub mod topological;

pub use disconnected::{DisconnectedGraphFinder, SubGraphView};
pub use roots::RootDetector;
pub use topological::{SortOptions, TopologicalSorter};
