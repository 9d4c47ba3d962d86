//! Runs Dijkstra and A* on the same query and measures the difference.

use crate::{
    algorithms::{astar::astar, dijkstra::dijkstra, graph::FlightGraph},
    haversine::Heuristic,
    metrics::{round_to, MetricRates},
    result::{ComparisonResult, Differential, Efficiency, SearchResult},
};

/// Runs Dijkstra, then A*, from `origin` to `destination`.
///
/// Both results are always reported. The differential is only
/// computed when both searches succeeded.
pub fn compare<H>(
    graph: &FlightGraph,
    heuristic: &H,
    rates: &MetricRates,
    origin: &str,
    destination: &str,
) -> ComparisonResult
where
    H: Heuristic + ?Sized,
{
    let dijkstra = dijkstra(graph, rates, origin, destination);
    let astar = astar(graph, heuristic, rates, origin, destination);

    let differential = if dijkstra.success && astar.success {
        Some(differential(&dijkstra, &astar))
    } else {
        debug!(
            "Skipping comparison of {} -> {}: Dijkstra success {}, A* success {}",
            origin, destination, dijkstra.success, astar.success
        );
        None
    };

    ComparisonResult {
        dijkstra,
        astar,
        differential,
    }
}

/// Differences between two successful searches.
pub fn differential(dijkstra: &SearchResult, astar: &SearchResult) -> Differential {
    let dijkstra_ms = dijkstra.execution_time_ms();
    let astar_ms = astar.execution_time_ms();

    Differential {
        distance_difference_km: (dijkstra.distance_km - astar.distance_km).abs(),
        time_difference_hours: round_to((dijkstra.time_hours - astar.time_hours).abs(), 1),
        cost_difference: round_to((dijkstra.cost - astar.cost).abs(), 0),
        nodes_explored_difference: dijkstra.nodes_explored as i64 - astar.nodes_explored as i64,
        execution_time_difference_ms: dijkstra_ms - astar_ms,
        efficiency: Efficiency {
            nodes_explored_ratio_percent: astar.nodes_explored as f64
                / dijkstra.nodes_explored as f64
                * 100.0,
            time_efficiency: (astar_ms > 0.0).then(|| dijkstra_ms / astar_ms),
        },
    }
}

#[cfg(test)]
mod compare_tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        dataset::NetworkConfig,
        haversine::GreatCircle,
        location::CoordinateStore,
        result::Algorithm,
        status::SearchFailure,
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

    fn result(algorithm: Algorithm, distance_km: f64, nodes: usize, micros: u64) -> SearchResult {
        SearchResult::found(
            algorithm,
            vec!["A".to_string(), "B".to_string()],
            distance_km,
            nodes,
            Duration::from_micros(micros),
            &MetricRates::default(),
        )
    }

    #[test]
    fn test_compare_new_york_sydney() {
        let (graph, coordinates) = builtin();
        let heuristic = GreatCircle::new(&coordinates);
        let comparison = compare(&graph, &heuristic, &MetricRates::default(), "New York", "Sydney");

        assert!(comparison.both_successful());
        assert_eq!(comparison.dijkstra.algorithm, Algorithm::Dijkstra);
        assert_eq!(comparison.astar.algorithm, Algorithm::AStar);

        let differential = comparison.differential.unwrap();
        assert_eq!(differential.distance_difference_km, 0.0);
        assert_eq!(differential.time_difference_hours, 0.0);
        assert_eq!(differential.cost_difference, 0.0);
        assert_eq!(differential.nodes_explored_difference, 10);
        assert!((differential.efficiency.nodes_explored_ratio_percent - 300.0 / 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_unknown_location() {
        let (graph, coordinates) = builtin();
        let heuristic = GreatCircle::new(&coordinates);
        let comparison = compare(&graph, &heuristic, &MetricRates::default(), "Nowhere", "Tokyo");

        assert!(!comparison.both_successful());
        assert!(comparison.differential.is_none());
        assert_eq!(
            comparison.dijkstra.failure,
            Some(SearchFailure::UnknownLocation("Nowhere".to_string()))
        );
        assert_eq!(comparison.astar.failure, comparison.dijkstra.failure);
    }

    #[test]
    fn test_differential() {
        let dijkstra = result(Algorithm::Dijkstra, 1000.0, 8, 300);
        let astar = result(Algorithm::AStar, 1000.0, 2, 100);
        let differential = differential(&dijkstra, &astar);

        assert_eq!(differential.nodes_explored_difference, 6);
        assert!((differential.execution_time_difference_ms - 0.2).abs() < 1e-9);
        assert_eq!(differential.efficiency.nodes_explored_ratio_percent, 25.0);
        assert!((differential.efficiency.time_efficiency.unwrap() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_differential_rounding() {
        // 85 km apart: 0.1 h and $10.20 before rounding
        let dijkstra = result(Algorithm::Dijkstra, 935.0, 3, 10);
        let astar = result(Algorithm::AStar, 850.0, 4, 10);
        let differential = differential(&dijkstra, &astar);

        assert_eq!(differential.distance_difference_km, 85.0);
        assert_eq!(differential.time_difference_hours, 0.1);
        assert_eq!(differential.cost_difference, 10.0);
        assert_eq!(differential.nodes_explored_difference, -1);
    }

    #[test]
    fn test_differential_instant_astar() {
        let dijkstra = result(Algorithm::Dijkstra, 10.0, 3, 10);
        let astar = result(Algorithm::AStar, 10.0, 3, 0);
        assert_eq!(differential(&dijkstra, &astar).efficiency.time_efficiency, None);
    }
}
