//! A* path search over grid adjacency maps, built on a comparator-driven
//! binary min-heap.
//!
//! - [`MinHeap`] is a generic min-heap ordered by a caller-supplied
//!   comparator, usable on its own for sorting ([`heapsort`]) or
//!   scheduling.
//! - [`PathFinder`] (or the [`search`] shorthand) runs A* from a start key to
//!   a target key of a [`Graph`](gridstar_core::Graph), ordering its open set
//!   with a [`Heuristic`].
//!
//! ```
//! use gridstar_core::Graph;
//! use gridstar_paths::search;
//!
//! let mut graph = Graph::new();
//! graph.insert("0,0".to_string(), vec!["1,0".to_string()]);
//! graph.insert("1,0".to_string(), vec!["0,0".to_string()]);
//!
//! let result = search(&graph, "0,0", "1,0", Some("manhattan")).unwrap();
//! assert_eq!(result.cost, 1.0);
//! assert_eq!(result.path, ["0,0", "1,0"]);
//! ```
//!
//! Every search allocates its own ledger and open set; nothing is shared
//! between calls and the graph is never modified.

mod astar;
mod distance;
mod error;
pub mod heap;
mod options;

pub use astar::{CostModel, PathFinder, PathResult, search};
pub use distance::{Estimator, Heuristic, euclidean, manhattan};
pub use error::SearchError;
pub use heap::{EmptyHeapError, MinHeap, heapsort};
pub use options::SearchOptions;
