//! Flight Routing Algorithm Library.
//! Finds the shortest flight route between two cities with Dijkstra
//! or A*, and compares both algorithms on the same query.

#[macro_use]
extern crate log;

pub mod types {
    pub mod edge;
    pub mod error;
    pub mod location;
    pub mod result;
    pub mod router;
    pub mod status;
}

pub mod utils {
    pub mod dataset;
    pub mod graph;
    pub mod haversine;
    pub mod metrics;
    pub mod report;
    pub mod request;
}

pub mod algorithms {
    pub mod astar;
    pub mod compare;
    pub mod dijkstra;
    pub(crate) mod frontier;
    pub mod graph;
    pub(crate) mod path;
}

pub use types::*;
pub use utils::*;

pub use algorithms::graph::FlightGraph;
pub use dataset::{CityConfig, NetworkConfig};
pub use edge::Edge;
pub use error::{ConfigError, RequestError};
pub use haversine::{GreatCircle, Heuristic, ZeroHeuristic};
pub use location::{Coordinate, CoordinateStore};
pub use metrics::{MetricRates, AVERAGE_CRUISE_SPEED_KMH, COST_PER_KM};
pub use request::{RouteOutcome, RouteRequest, Selector};
pub use result::{Algorithm, ComparisonResult, Differential, Efficiency, SearchResult};
pub use router::engine::Router;
pub use status::SearchFailure;
