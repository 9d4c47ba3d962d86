//! Definition of the `Edge` type.
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// An edge is a directed flight route between two cities.
/// The distance represents the "weight" of the edge.
#[derive(Debug, Clone, PartialEq, Hash, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Departure city.
    pub from: String,

    /// Arrival city.
    pub to: String,

    /// Flight distance in kilometers.
    pub distance_km: OrderedFloat<f64>,
}

impl Edge {
    /// Creates a new route.
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance_km: f64) -> Edge {
        Edge {
            from: from.into(),
            to: to.into(),
            distance_km: OrderedFloat(distance_km),
        }
    }
}
