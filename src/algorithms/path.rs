//! Path reconstruction from predecessor links.

use petgraph::graph::NodeIndex;

use crate::algorithms::graph::FlightGraph;

/// Walks the predecessor links back from `destination` to `origin`.
///
/// Returns [`None`] if the chain breaks before reaching `origin`.
pub(crate) fn reconstruct(
    predecessors: &[Option<NodeIndex>],
    origin: NodeIndex,
    destination: NodeIndex,
) -> Option<Vec<NodeIndex>> {
    let mut path = vec![destination];
    let mut current = destination;
    while current != origin {
        current = predecessors[current.index()]?;
        // a chain longer than the graph has looped
        if path.len() > predecessors.len() {
            return None;
        }
        path.push(current);
    }
    path.reverse();
    Some(path)
}

/// Maps node indices back to city names.
pub(crate) fn names(graph: &FlightGraph, path: &[NodeIndex]) -> Vec<String> {
    path.iter()
        .map(|&index| graph.name_of(index).to_string())
        .collect()
}
