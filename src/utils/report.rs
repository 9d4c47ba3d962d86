//! Presentation of results for the transport layer.
//!
//! Reports are serializable records with human readable values:
//! distances rounded to the kilometer, times rounded to a tenth of an
//! hour (`"6.5 hours"`), costs rounded to the currency unit (`"$668"`)
//! and execution times in milliseconds (`"0.012 ms"`).

use serde::Serialize;

use crate::{
    error::RequestError,
    metrics::round_to,
    request::RouteOutcome,
    result::{Algorithm, ComparisonResult, Differential, SearchResult},
};

/// One algorithm run, as presented to a client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    pub algorithm: &'static str,
    pub path: Vec<String>,
    /// `None` when the distance is infinite.
    pub distance: Option<f64>,
    pub time: String,
    pub cost: String,
    pub nodes_explored: usize,
    pub execution_time: String,
    pub success: bool,
}

impl From<&SearchResult> for SearchReport {
    fn from(result: &SearchResult) -> Self {
        SearchReport {
            algorithm: result.algorithm.name(),
            path: result.path.clone(),
            distance: result
                .distance_km
                .is_finite()
                .then(|| result.distance_km.round()),
            time: format_hours(result.time_hours),
            cost: format_cost(result.cost),
            nodes_explored: result.nodes_explored,
            execution_time: format!("{:.3} ms", result.execution_time_ms()),
            success: result.success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyReport {
    /// A* nodes explored as a percentage of Dijkstra's, e.g. `"23%"`.
    pub nodes_explored_ratio: String,
    /// Absent when the A* run was too fast to be measured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_efficiency: Option<String>,
}

/// Short description of each algorithm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Characteristics {
    #[serde(rename = "Dijkstra")]
    pub dijkstra: &'static str,
    #[serde(rename = "A*")]
    pub astar: &'static str,
}

impl Default for Characteristics {
    fn default() -> Self {
        Characteristics {
            dijkstra: Algorithm::Dijkstra.characteristics(),
            astar: Algorithm::AStar.characteristics(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifferentialReport {
    pub distance_difference: f64,
    pub time_difference: String,
    pub cost_difference: String,
    pub nodes_explored_difference: i64,
    pub execution_time_difference: String,
    pub efficiency: EfficiencyReport,
    pub characteristics: Characteristics,
}

impl From<&Differential> for DifferentialReport {
    fn from(differential: &Differential) -> Self {
        DifferentialReport {
            distance_difference: differential.distance_difference_km.round(),
            time_difference: format_hours(differential.time_difference_hours),
            cost_difference: format_cost(differential.cost_difference),
            nodes_explored_difference: differential.nodes_explored_difference,
            execution_time_difference: format!(
                "{:.2} ms",
                round_to(differential.execution_time_difference_ms, 2)
            ),
            efficiency: EfficiencyReport {
                nodes_explored_ratio: format!(
                    "{}%",
                    differential.efficiency.nodes_explored_ratio_percent.round()
                ),
                time_efficiency: differential
                    .efficiency
                    .time_efficiency
                    .map(|speedup| format!("{:.2}x faster", round_to(speedup, 2))),
            },
            characteristics: Characteristics::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub both_successful: bool,
    #[serde(flatten)]
    pub details: Option<DifferentialReport>,
}

/// Both algorithm runs and their comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub dijkstra: SearchReport,
    pub a_star: SearchReport,
    pub comparison: ComparisonSummary,
}

impl From<&ComparisonResult> for ComparisonReport {
    fn from(comparison: &ComparisonResult) -> Self {
        ComparisonReport {
            dijkstra: SearchReport::from(&comparison.dijkstra),
            a_star: SearchReport::from(&comparison.astar),
            comparison: ComparisonSummary {
                both_successful: comparison.both_successful(),
                details: comparison.differential.as_ref().map(DifferentialReport::from),
            },
        }
    }
}

/// Report of any dispatched request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RouteReport {
    Single(SearchReport),
    Comparison(ComparisonReport),
}

impl From<&RouteOutcome> for RouteReport {
    fn from(outcome: &RouteOutcome) -> Self {
        match outcome {
            RouteOutcome::Single(result) => RouteReport::Single(result.into()),
            RouteOutcome::Comparison(comparison) => RouteReport::Comparison(comparison.into()),
        }
    }
}

impl RouteReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// A rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub success: bool,
    pub error: String,
}

impl From<&RequestError> for ErrorReport {
    fn from(err: &RequestError) -> Self {
        ErrorReport {
            success: false,
            error: err.to_string(),
        }
    }
}

fn format_hours(hours: f64) -> String {
    if hours.is_finite() {
        format!("{:.1} hours", round_to(hours, 1))
    } else {
        "unreachable".to_string()
    }
}

fn format_cost(cost: f64) -> String {
    if cost.is_finite() {
        format!("${}", cost.round() as i64)
    } else {
        "unreachable".to_string()
    }
}
