//! Helper functions for working with graphs.

use std::collections::{BTreeSet, HashMap};

use crate::edge::Edge;

/// Collapse routes that share the same departure and arrival city.
///
/// The graph holds at most one weight per ordered pair of cities, so a
/// route listed twice keeps its last distance. The surviving route
/// stays at the position of its first occurrence.
///
/// # Arguments
/// * `routes` - Routes in the order they were declared.
///
/// # Returns
/// A vector of unique routes.
///
/// # Time Complexity
/// *O*(*n*) on the number of routes.
pub fn build_edges(routes: &[Edge]) -> Vec<Edge> {
    let mut positions: HashMap<(&str, &str), usize> = HashMap::new();
    let mut edges: Vec<Edge> = Vec::with_capacity(routes.len());
    for route in routes {
        match positions.get(&(route.from.as_str(), route.to.as_str())) {
            Some(&position) => {
                warn!(
                    "Route {} -> {} declared twice, keeping {} km",
                    route.from, route.to, route.distance_km
                );
                edges[position].distance_km = route.distance_km;
            }
            None => {
                positions.insert((route.from.as_str(), route.to.as_str()), edges.len());
                edges.push(route.clone());
            }
        }
    }
    edges
}

/// Every city named by at least one route, in lexicographic order.
pub fn endpoints(edges: &[Edge]) -> BTreeSet<&str> {
    edges
        .iter()
        .flat_map(|edge| [edge.from.as_str(), edge.to.as_str()])
        .collect()
}
