//! Minimum travel time routing between named locations of an undirected graph

pub mod collections;
pub mod errors;
pub mod graph;
pub mod graph_algos;
pub mod loader;
pub mod report;

pub use errors::{LoadError, RouteError};
pub use graph::{Edge, Graph, Minutes};
pub use graph_algos::{Route, ShortestPathSolver};
