use crate::errors::RouteError;
use crate::collections::FxIndexMap;
use crate::graph::Graph;
use super::{shortest_path, Route, SearchTable, NO_PARENT};

use std::{collections::BinaryHeap, cmp::Ordering, fmt::Debug};
use log::{debug, trace};
use num_traits::{CheckedAdd, Zero};




/// Minimum-weight routing using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// The solver holds no state between queries, any number of queries
/// may run against the same graph, also from several threads at once.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShortestPathSolver;

impl ShortestPathSolver {

    /// Find the minimum-weight path from source to target
    /// Unknown endpoints fail before any search is attempted
    pub fn solve<C>(&self, graph: &Graph<C>, source: &str, target: &str) -> Result<Route<C>, RouteError>
    where
        C: Zero + CheckedAdd + Ord + Copy + Debug,
    {
        let source_index = lookup(graph, source)?;
        let target_index = lookup(graph, target)?;

        if source_index == target_index {
            return Ok(Route::Reachable {
                path: vec![source.to_string()],
                total: C::zero(),
            });
        }

        let table = build_dijkstra_table(graph, source_index, Some(target_index));

        let route = match (table[target_index], shortest_path(graph, &table, target_index)) {
            (Some((_, total)), Some(path)) => Route::Reachable { path, total },
            _ => Route::Unreachable,
        };

        debug!("{source} -> {target}: {:?}", route.total());
        Ok(route)
    }

    /// Returns the cost of every node reachable from source, source included
    /// Unreachable nodes are absent from the map
    pub fn distances<C>(&self, graph: &Graph<C>, source: &str) -> Result<FxIndexMap<String, C>, RouteError>
    where
        C: Zero + CheckedAdd + Ord + Copy + Debug,
    {
        let source_index = lookup(graph, source)?;
        let table = build_dijkstra_table(graph, source_index, None);

        let distances = graph.nodes()
            .zip(table)
            .filter_map(|(node, entry)| entry.map(|(_, cost)| (node.to_string(), cost)))
            .collect();

        Ok(distances)
    }
}


fn lookup<C: Copy>(graph: &Graph<C>, node: &str) -> Result<usize, RouteError> {
    graph.index_of(node).ok_or_else(|| RouteError::UnknownNode(node.to_string()))
}


/// Traverses the graph using Dijkstra's algorithm
/// Stops once the goal is settled, or when every reachable node is settled
/// Returns the parent and cost of every node reached so far
fn build_dijkstra_table<C>(graph: &Graph<C>, start: usize, goal: Option<usize>) -> SearchTable<C>
where
    C: Zero + CheckedAdd + Ord + Copy + Debug,
{
    let mut table: SearchTable<C> = vec![None; graph.node_count()];
    let mut settled = vec![false; graph.node_count()];

    // Nodes to visit - binary heap sorts Biggest to Smallest, NodeId reverses that
    // Only reached nodes are ever pushed, so an empty heap means
    // everything left is infinitely far away
    let mut nodes_to_visit: BinaryHeap<NodeId<'_, C>> = BinaryHeap::new();

    table[start] = Some((NO_PARENT, C::zero()));
    nodes_to_visit.push(NodeId {
        index: start,
        cost: C::zero(),
        label: graph.label(start),
    });

    while let Some(NodeId { index, cost, .. }) = nodes_to_visit.pop() {

        // stale entry, node was settled through a cheaper path
        if settled[index] {
            continue;
        }
        settled[index] = true;

        if goal == Some(index) {
            break;
        }

        for &(neighbor, edge_cost) in graph.neighbors_at(index) {
            if settled[neighbor] {
                continue;
            }

            // a sum past the weight type's range can never beat a finite cost
            let Some(new_cost) = cost.checked_add(&edge_cost) else {
                continue;
            };

            // strict relaxation: an equal cost never replaces the first parent found
            let improves = match table[neighbor] {
                None => true,
                Some((_, best)) => new_cost < best,
            };

            if improves {
                trace!("relax {} via {} to {:?}", graph.label(neighbor), graph.label(index), new_cost);
                table[neighbor] = Some((index, new_cost));
                nodes_to_visit.push(NodeId {
                    index: neighbor,
                    cost: new_cost,
                    label: graph.label(neighbor),
                });
            }
        }
    }

    table
}


/// Node identifier
/// - ordered by cost, then by label so equal-cost nodes settle in a fixed order
/// - the label borrows from the graph, no copies are made
#[derive(Debug)]
struct NodeId<'a, T> {
    index: usize,
    cost: T,
    label: &'a str,
}

impl<T: Ord> Ord for NodeId<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
            .then_with(|| other.label.cmp(self.label))
    }
}
impl<T: Ord> PartialOrd for NodeId<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: Ord> PartialEq for NodeId<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T: Ord> Eq for NodeId<'_, T> {}
