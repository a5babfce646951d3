use crate::errors::RouteError;
use crate::collections::FxIndexMap;

use std::fmt::Debug;
use log::debug;
use num_traits::Zero;


/// Travel time between two locations
pub type Minutes = i64;


/// Undirected weighted connection as handed over by the loader
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<C = Minutes> {
    pub from: String,
    pub to: String,
    pub weight: C,
}

impl<C> Edge<C> {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: C) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}


/// Undirected graph of labelled nodes
///
/// Labels are interned once: the position of a label in `adjacency` is its
/// node index, and every neighbor entry is `(node index, weight)`.
/// Both directions are stored for each edge, duplicates included.
#[derive(Clone, Debug)]
pub struct Graph<C = Minutes> {
    adjacency: FxIndexMap<String, Vec<(usize, C)>>,
    edge_count: usize,
}

impl<C> Default for Graph<C> {
    fn default() -> Self {
        Self {
            adjacency: FxIndexMap::default(),
            edge_count: 0,
        }
    }
}

impl<C> Graph<C>
where
    C: Zero + Ord + Copy + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a full edge list
    /// Any rejected edge aborts construction, no partial graph is returned
    pub fn from_edges<I>(edges: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = Edge<C>>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(&edge.from, &edge.to, edge.weight)?;
        }

        debug!("graph built with {} nodes and {} edges", graph.node_count(), graph.edge_count());
        Ok(graph)
    }

    /// Insert an undirected edge, registering both endpoints
    /// The graph is left untouched when the edge is rejected
    pub fn add_edge(&mut self, from: &str, to: &str, weight: C) -> Result<(), RouteError> {
        let reason = if weight < C::zero() {
            Some(format!("negative weight {weight:?}"))
        } else if from.is_empty() || to.is_empty() {
            Some("empty node label".to_string())
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(RouteError::InvalidEdge {
                from: from.to_string(),
                to: to.to_string(),
                reason,
            });
        }

        let from_index = self.intern(from);
        let to_index = self.intern(to);

        self.adjacency[from_index].push((to_index, weight));
        // a self loop gets a single entry
        if from_index != to_index {
            self.adjacency[to_index].push((from_index, weight));
        }
        self.edge_count += 1;

        Ok(())
    }
}

impl<C: Copy> Graph<C> {

    /// All distinct node labels, in first-seen order
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    /// Adjacent nodes with the weight of the connecting edge
    /// Unknown nodes have no neighbors
    pub fn neighbors<'a>(&'a self, node: &str) -> impl Iterator<Item = (&'a str, C)> + 'a {
        self.adjacency
            .get(node)
            .into_iter()
            .flatten()
            .map(|&(index, weight)| (self.label(index), weight))
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges added, duplicates counted separately
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub(crate) fn index_of(&self, node: &str) -> Option<usize> {
        self.adjacency.get_index_of(node)
    }

    /// Indices come from `index_of` or neighbor entries, always in range
    pub(crate) fn label(&self, index: usize) -> &str {
        self.adjacency
            .get_index(index)
            .map(|(label, _)| label.as_str())
            .expect("node index out of range")
    }

    pub(crate) fn neighbors_at(&self, index: usize) -> &[(usize, C)] {
        &self.adjacency[index]
    }

    fn intern(&mut self, label: &str) -> usize {
        match self.adjacency.get_index_of(label) {
            Some(index) => index,
            None => self.adjacency.insert_full(label.to_string(), Vec::new()).0,
        }
    }
}
