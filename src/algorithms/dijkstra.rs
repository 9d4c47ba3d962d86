//! Uniform-cost search between two cities.

use std::{collections::BinaryHeap, time::Instant};

use crate::{
    algorithms::{frontier::FrontierEntry, graph::FlightGraph, path},
    metrics::MetricRates,
    result::{Algorithm, SearchResult},
    status::SearchFailure,
};

/// Finds the shortest route from `origin` to `destination` with
/// Dijkstra's algorithm.
///
/// The frontier is a binary heap with lazy deletion: a city may be
/// pushed several times, and entries made obsolete by a later
/// relaxation are skipped when popped. Every pop counts as an
/// explored node, stale ones included. The search stops as soon as the
/// destination is popped.
///
/// # Returns
/// A failed result with an infinite distance if either city is unknown
/// or if the destination cannot be reached.
pub fn dijkstra(
    graph: &FlightGraph,
    rates: &MetricRates,
    origin: &str,
    destination: &str,
) -> SearchResult {
    let started = Instant::now();
    let (from, to) = match graph.resolve(origin, destination) {
        Ok(indices) => indices,
        Err(failure) => {
            warn!("Dijkstra: {}", failure);
            return SearchResult::failed(
                Algorithm::Dijkstra,
                failure,
                f64::INFINITY,
                0,
                started.elapsed(),
                rates,
            );
        }
    };

    let mut distances = vec![f64::INFINITY; graph.node_count()];
    let mut predecessors = vec![None; graph.node_count()];
    let mut frontier = BinaryHeap::new();
    let mut nodes_explored = 0;

    distances[from.index()] = 0.0;
    frontier.push(FrontierEntry::new(0.0, 0.0, from));

    while let Some(entry) = frontier.pop() {
        nodes_explored += 1;
        let current = entry.node;
        if current == to {
            break;
        }
        if entry.is_stale(&distances) {
            continue;
        }
        for (next, distance_km) in graph.edges_from(current) {
            let candidate = distances[current.index()] + distance_km;
            if candidate < distances[next.index()] {
                distances[next.index()] = candidate;
                predecessors[next.index()] = Some(current);
                frontier.push(FrontierEntry::new(candidate, candidate, next));
            }
        }
    }
    let execution_time = started.elapsed();

    let distance_km = distances[to.index()];
    let route = if distance_km.is_finite() {
        path::reconstruct(&predecessors, from, to)
    } else {
        None
    };
    debug!(
        "Dijkstra {} -> {}: {} km, {} nodes explored",
        origin, destination, distance_km, nodes_explored
    );

    match route {
        Some(route) => SearchResult::found(
            Algorithm::Dijkstra,
            path::names(graph, &route),
            distance_km,
            nodes_explored,
            execution_time,
            rates,
        ),
        None => SearchResult::failed(
            Algorithm::Dijkstra,
            SearchFailure::Unreachable,
            f64::INFINITY,
            nodes_explored,
            execution_time,
            rates,
        ),
    }
}
