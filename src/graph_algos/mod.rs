pub mod dijkstra;
mod route;
mod shortest_path;

pub use dijkstra::ShortestPathSolver;
pub use route::Route;

use shortest_path::shortest_path;

/// Marks the search origin in a `SearchTable`
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Per-query table indexed by graph node index
/// Each reached node holds (parent_index, cost) where:
/// - parent_index is the node index of the predecessor on the best known path
/// - cost is the total cost to reach this node from the start
/// Unreached nodes are `None`, i.e. infinitely far away
pub(crate) type SearchTable<C> = Vec<Option<(usize, C)>>;
