use crate::graph::Graph;
use super::{NO_PARENT, SearchTable};

/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered labels from start to goal, `None` if the goal was never reached
/// table: SearchTable<C> - parent index and cost per node index
/// goal_index: usize - index of the goal node in the graph
pub(crate) fn shortest_path<C: Copy>(graph: &Graph<C>, table: &SearchTable<C>, goal_index: usize) -> Option<Vec<String>> {

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != NO_PARENT {
        let &(parent_index, _) = table.get(current_index)?.as_ref()?;
        path.push(graph.label(current_index).to_string());
        current_index = parent_index;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Some(path)
}
