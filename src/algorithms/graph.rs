//! Defines the flight graph and associated functions.
//!
//! The graph is a [`petgraph`] directed graph whose node weights are
//! city names and whose edge weights are flight distances. A
//! [`HashMap`] maps each city name to its [`NodeIndex`] for fast
//! lookup.
//!
//! Cities are inserted in lexicographic order, so comparing two
//! [`NodeIndex`] values is the same as comparing the two city names.
//! The search frontier relies on this to break ties between entries of
//! equal priority.

use std::collections::HashMap;

use ordered_float::OrderedFloat;
use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use crate::{
    edge::Edge,
    graph::{build_edges, endpoints},
    status::SearchFailure,
};

/// Immutable weighted directed graph of flight routes.
#[derive(Debug, Clone)]
pub struct FlightGraph {
    graph: DiGraph<String, OrderedFloat<f64>>,
    node_indices: HashMap<String, NodeIndex>,
}

impl FlightGraph {
    /// Builds the graph from a list of routes.
    ///
    /// Every city named by a route becomes a node. Routes are expected
    /// to be validated beforehand, see
    /// [`NetworkConfig::validate`](crate::dataset::NetworkConfig::validate).
    pub fn new(routes: &[Edge]) -> FlightGraph {
        let edges = build_edges(routes);
        let mut graph = DiGraph::with_capacity(0, edges.len());
        let mut node_indices = HashMap::new();

        for name in endpoints(&edges) {
            let index = graph.add_node(name.to_string());
            node_indices.insert(name.to_string(), index);
        }
        for edge in &edges {
            let from = node_indices[&edge.from];
            let to = node_indices[&edge.to];
            graph.add_edge(from, to, edge.distance_km);
        }

        FlightGraph {
            graph,
            node_indices,
        }
    }

    /// Get the NodeIndex of a city. The NodeIndex is used to reference
    /// things in the graph.
    pub fn index_of(&self, location: &str) -> Option<NodeIndex> {
        self.node_indices.get(location).copied()
    }

    /// Name of the city at `index`.
    ///
    /// # Panics
    /// If `index` does not belong to this graph.
    pub fn name_of(&self, index: NodeIndex) -> &str {
        &self.graph[index]
    }

    /// Returns `true` if the city is a node of the graph.
    pub fn contains(&self, location: &str) -> bool {
        self.node_indices.contains_key(location)
    }

    /// Resolves both ends of a query to node indices.
    pub fn resolve(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<(NodeIndex, NodeIndex), SearchFailure> {
        let from = self
            .index_of(origin)
            .ok_or_else(|| SearchFailure::UnknownLocation(origin.to_string()))?;
        let to = self
            .index_of(destination)
            .ok_or_else(|| SearchFailure::UnknownLocation(destination.to_string()))?;
        Ok((from, to))
    }

    /// Outgoing routes of a city as `(neighbor, distance_km)` pairs.
    ///
    /// An unknown city has no neighbors.
    pub fn neighbors(&self, location: &str) -> Vec<(&str, f64)> {
        match self.index_of(location) {
            Some(index) => self
                .edges_from(index)
                .map(|(next, distance_km)| (self.name_of(next), distance_km))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Outgoing edges of a node, for the search algorithms.
    pub(crate) fn edges_from(&self, index: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.graph
            .edges(index)
            .map(|edge| (edge.target(), edge.weight().into_inner()))
    }

    /// Distance of the direct route between two cities, if any.
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        let (from, to) = self.resolve(from, to).ok()?;
        self.graph
            .find_edge(from, to)
            .map(|edge| self.graph[edge].into_inner())
    }

    /// All cities of the graph in lexicographic order.
    pub fn all_locations(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|index| self.name_of(index))
            .collect()
    }

    /// Get the number of cities in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of routes in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
