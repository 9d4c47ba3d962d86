//! Heuristic-guided search between two cities.

use std::{collections::BinaryHeap, time::Instant};

use crate::{
    algorithms::{frontier::FrontierEntry, graph::FlightGraph, path},
    haversine::Heuristic,
    metrics::MetricRates,
    result::{Algorithm, SearchResult},
    status::SearchFailure,
};

/// Finds the shortest route from `origin` to `destination` with A*.
///
/// The frontier is ordered by `g + h`, where `g` is the distance
/// flown from the origin and `h` the heuristic estimate of the
/// remaining distance. Relaxation and stale-entry handling work on `g`
/// exactly like [`dijkstra`](super::dijkstra::dijkstra). The route is
/// extracted as soon as the destination is popped.
///
/// # Returns
/// A failed result with distance, time and cost all zero if either
/// city is unknown or the destination cannot be reached.
pub fn astar<H>(
    graph: &FlightGraph,
    heuristic: &H,
    rates: &MetricRates,
    origin: &str,
    destination: &str,
) -> SearchResult
where
    H: Heuristic + ?Sized,
{
    let started = Instant::now();
    let (from, to) = match graph.resolve(origin, destination) {
        Ok(indices) => indices,
        Err(failure) => {
            warn!("A*: {}", failure);
            return SearchResult::failed(
                Algorithm::AStar,
                failure,
                0.0,
                0,
                started.elapsed(),
                rates,
            );
        }
    };

    let mut g_scores = vec![f64::INFINITY; graph.node_count()];
    let mut predecessors = vec![None; graph.node_count()];
    let mut frontier = BinaryHeap::new();
    let mut nodes_explored = 0;

    g_scores[from.index()] = 0.0;
    frontier.push(FrontierEntry::new(
        heuristic.estimate(origin, destination),
        0.0,
        from,
    ));

    while let Some(entry) = frontier.pop() {
        nodes_explored += 1;
        let current = entry.node;
        if current == to {
            let execution_time = started.elapsed();
            let distance_km = g_scores[to.index()];
            debug!(
                "A* {} -> {}: {} km, {} nodes explored",
                origin, destination, distance_km, nodes_explored
            );
            return match path::reconstruct(&predecessors, from, to) {
                Some(route) => SearchResult::found(
                    Algorithm::AStar,
                    path::names(graph, &route),
                    distance_km,
                    nodes_explored,
                    execution_time,
                    rates,
                ),
                None => SearchResult::failed(
                    Algorithm::AStar,
                    SearchFailure::Unreachable,
                    0.0,
                    nodes_explored,
                    execution_time,
                    rates,
                ),
            };
        }
        if entry.is_stale(&g_scores) {
            continue;
        }
        for (next, distance_km) in graph.edges_from(current) {
            let tentative = g_scores[current.index()] + distance_km;
            if tentative < g_scores[next.index()] {
                g_scores[next.index()] = tentative;
                predecessors[next.index()] = Some(current);
                let f_score = tentative + heuristic.estimate(graph.name_of(next), destination);
                frontier.push(FrontierEntry::new(f_score, tentative, next));
            }
        }
    }

    debug!(
        "A* {} -> {}: unreachable after {} nodes explored",
        origin, destination, nodes_explored
    );
    SearchResult::failed(
        Algorithm::AStar,
        SearchFailure::Unreachable,
        0.0,
        nodes_explored,
        started.elapsed(),
        rates,
    )
}

#[cfg(test)]
mod astar_tests {
    use super::*;
    use crate::{
        algorithms::dijkstra::dijkstra,
        dataset::NetworkConfig,
        edge::Edge,
        haversine::{GreatCircle, ZeroHeuristic},
        location::{Coordinate, CoordinateStore},
    };

    fn builtin() -> (FlightGraph, CoordinateStore) {
        let config = NetworkConfig::builtin();
        let coordinates = CoordinateStore::new(
            config
                .cities
                .iter()
                .map(|city| (city.name.clone(), city.coordinate())),
        );
        (FlightGraph::new(&config.routes), coordinates)
    }

    #[test]
    fn test_direct_flight() {
        let (graph, coordinates) = builtin();
        let heuristic = GreatCircle::new(&coordinates);
        let result = astar(&graph, &heuristic, &MetricRates::default(), "New York", "London");

        assert!(result.success);
        assert_eq!(result.algorithm, Algorithm::AStar);
        assert_eq!(result.path, vec!["New York", "London"]);
        assert_eq!(result.distance_km, 5567.0);
        assert_eq!(result.nodes_explored, 2);
    }

    #[test]
    fn test_connecting_flight() {
        let (graph, coordinates) = builtin();
        let heuristic = GreatCircle::new(&coordinates);
        let result = astar(&graph, &heuristic, &MetricRates::default(), "New York", "Sydney");

        assert!(result.success);
        assert_eq!(result.path, vec!["New York", "Los Angeles", "Sydney"]);
        assert_eq!(result.distance_km, 15996.0);
        assert_eq!(result.nodes_explored, 3);
    }

    #[test]
    fn test_zero_heuristic_explores_like_dijkstra() {
        let (graph, _) = builtin();
        let rates = MetricRates::default();
        for (origin, destination) in [("New York", "Sydney"), ("Rome", "Hong Kong"), ("Seoul", "Mumbai")] {
            let guided = astar(&graph, &ZeroHeuristic, &rates, origin, destination);
            let uniform = dijkstra(&graph, &rates, origin, destination);
            assert_eq!(guided.path, uniform.path);
            assert_eq!(guided.distance_km, uniform.distance_km);
            assert_eq!(guided.nodes_explored, uniform.nodes_explored);
        }
    }

    #[test]
    fn test_origin_is_destination() {
        let (graph, coordinates) = builtin();
        let heuristic = GreatCircle::new(&coordinates);
        let result = astar(&graph, &heuristic, &MetricRates::default(), "Tokyo", "Tokyo");

        assert!(result.success);
        assert_eq!(result.path, vec!["Tokyo"]);
        assert_eq!(result.distance_km, 0.0);
        assert_eq!(result.nodes_explored, 1);
    }

    #[test]
    fn test_unknown_location() {
        let (graph, coordinates) = builtin();
        let heuristic = GreatCircle::new(&coordinates);
        let result = astar(&graph, &heuristic, &MetricRates::default(), "Nowhere", "Tokyo");

        assert!(!result.success);
        assert!(result.path.is_empty());
        assert_eq!(result.distance_km, 0.0);
        assert_eq!(
            result.failure,
            Some(SearchFailure::UnknownLocation("Nowhere".to_string()))
        );
    }

    #[test]
    fn test_unreachable_reports_zero() {
        let graph = FlightGraph::new(&[Edge::new("A", "B", 1.0), Edge::new("C", "A", 1.0)]);
        let result = astar(&graph, &ZeroHeuristic, &MetricRates::default(), "A", "C");

        assert!(!result.success);
        assert!(result.path.is_empty());
        assert_eq!(result.distance_km, 0.0);
        assert_eq!(result.time_hours, 0.0);
        assert_eq!(result.cost, 0.0);
        assert_eq!(result.failure, Some(SearchFailure::Unreachable));
        assert_eq!(result.nodes_explored, 2);
    }

    /// Cities without a coordinate get an infinite estimate and are
    /// only expanded once every guided city has been.
    #[test]
    fn test_missing_coordinate_expanded_last() {
        let graph = FlightGraph::new(&[
            Edge::new("Origin", "Hidden", 200.0),
            Edge::new("Hidden", "Goal", 200.0),
            Edge::new("Origin", "Detour", 150.0),
            Edge::new("Detour", "Goal", 150.0),
        ]);
        let coordinates = CoordinateStore::new(vec![
            ("Origin", Coordinate::new(0.0, 0.0)),
            ("Detour", Coordinate::new(0.0, 0.5)),
            ("Goal", Coordinate::new(0.0, 1.0)),
        ]);
        let heuristic = GreatCircle::new(&coordinates);
        let result = astar(&graph, &heuristic, &MetricRates::default(), "Origin", "Goal");

        assert!(result.success);
        assert_eq!(result.path, vec!["Origin", "Detour", "Goal"]);
        assert_eq!(result.distance_km, 300.0);
        // Hidden is never popped
        assert_eq!(result.nodes_explored, 3);
    }
}
