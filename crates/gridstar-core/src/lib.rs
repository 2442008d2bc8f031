//! **gridstar-core** — node keys and adjacency maps for grid path search.
//!
//! A traversable grid cell is identified by a string node key of the form
//! `"x,y"` (column, row). This crate provides the [`Point`] type those keys
//! decode to and the [`Graph`] adjacency map that path search consumes.

pub mod geom;
pub mod graph;

pub use geom::{KeyError, Point};
pub use graph::{Graph, GraphError};
