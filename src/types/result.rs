//! Results produced by the path finding algorithms.

use std::{fmt, str::FromStr, time::Duration};

use crate::{error::RequestError, metrics::MetricRates, status::SearchFailure};

/// Path finding algorithms.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// The Dijkstra algorithm.
    Dijkstra,
    /// The A Star algorithm.
    AStar,
}

impl Algorithm {
    /// Display name reported in results.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
        }
    }

    /// Selector accepted by [`FromStr`].
    pub fn selector(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }

    /// One sentence describing how the algorithm behaves.
    pub fn characteristics(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Explores all possible paths equally, guaranteed shortest path",
            Algorithm::AStar => "Uses heuristic to guide search, more efficient for large networks",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" => Ok(Algorithm::AStar),
            _ => Err(RequestError::InvalidAlgorithm(s.to_string())),
        }
    }
}

/// Outcome of a single algorithm run.
///
/// On failure the distance keeps the convention of the algorithm that
/// produced it: Dijkstra reports `f64::INFINITY`, A* reports `0.0`.
/// Use [`SearchResult::success`] or [`SearchResult::failure`] rather
/// than the distance to detect a failed search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub algorithm: Algorithm,

    /// Cities from origin to destination, empty on failure.
    pub path: Vec<String>,

    /// Sum of the edge weights along `path`, in kilometers.
    pub distance_km: f64,

    /// Estimated flight time in hours.
    pub time_hours: f64,

    /// Estimated ticket cost in currency units.
    pub cost: f64,

    /// Number of frontier pops, stale entries included.
    pub nodes_explored: usize,

    /// Wall-clock duration of the search.
    pub execution_time: Duration,

    pub success: bool,
    pub failure: Option<SearchFailure>,
}

impl SearchResult {
    /// A search that reached its destination.
    pub fn found(
        algorithm: Algorithm,
        path: Vec<String>,
        distance_km: f64,
        nodes_explored: usize,
        execution_time: Duration,
        rates: &MetricRates,
    ) -> SearchResult {
        SearchResult {
            algorithm,
            path,
            distance_km,
            time_hours: rates.flight_time_hours(distance_km),
            cost: rates.cost(distance_km),
            nodes_explored,
            execution_time,
            success: true,
            failure: None,
        }
    }

    /// A search that did not reach its destination. Time and cost are
    /// derived from `distance_km` like on success.
    pub fn failed(
        algorithm: Algorithm,
        failure: SearchFailure,
        distance_km: f64,
        nodes_explored: usize,
        execution_time: Duration,
        rates: &MetricRates,
    ) -> SearchResult {
        SearchResult {
            algorithm,
            path: Vec::new(),
            distance_km,
            time_hours: rates.flight_time_hours(distance_km),
            cost: rates.cost(distance_km),
            nodes_explored,
            execution_time,
            success: false,
            failure: Some(failure),
        }
    }

    /// Execution time in fractional milliseconds.
    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time.as_secs_f64() * 1000.0
    }
}

/// Relative efficiency of A* against Dijkstra.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Efficiency {
    /// A* nodes explored as a percentage of Dijkstra's.
    pub nodes_explored_ratio_percent: f64,

    /// Dijkstra execution time divided by A* execution time. [`None`]
    /// when the A* run was too fast to be measured.
    pub time_efficiency: Option<f64>,
}

/// Differences between two successful searches on the same query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Differential {
    /// Absolute distance difference in kilometers.
    pub distance_difference_km: f64,

    /// Absolute time difference, rounded to 0.1 hour.
    pub time_difference_hours: f64,

    /// Absolute cost difference, rounded to whole currency units.
    pub cost_difference: f64,

    /// Dijkstra nodes explored minus A* nodes explored.
    pub nodes_explored_difference: i64,

    /// Dijkstra execution time minus A* execution time, in ms.
    pub execution_time_difference_ms: f64,

    pub efficiency: Efficiency,
}

/// Both algorithms run on the same query.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub dijkstra: SearchResult,
    pub astar: SearchResult,

    /// Only present when both searches succeeded.
    pub differential: Option<Differential>,
}

impl ComparisonResult {
    pub fn both_successful(&self) -> bool {
        self.dijkstra.success && self.astar.success
    }
}
