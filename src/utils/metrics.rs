//! Converts a route distance into flight time and ticket cost.

use serde::{Deserialize, Serialize};

/// Average cruise speed of a commercial flight.
pub const AVERAGE_CRUISE_SPEED_KMH: f64 = 850.0;
/// Flat ticket price per kilometer flown.
pub const COST_PER_KM: f64 = 0.12;

/// Conversion rates from distance to time and cost.
///
/// Defaults to [`AVERAGE_CRUISE_SPEED_KMH`] and [`COST_PER_KM`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricRates {
    pub cruise_speed_kmh: f64,
    pub cost_per_km: f64,
}

impl Default for MetricRates {
    fn default() -> Self {
        MetricRates {
            cruise_speed_kmh: AVERAGE_CRUISE_SPEED_KMH,
            cost_per_km: COST_PER_KM,
        }
    }
}

impl MetricRates {
    /// Estimated flight time in hours for `distance_km`.
    pub fn flight_time_hours(&self, distance_km: f64) -> f64 {
        distance_km / self.cruise_speed_kmh
    }

    /// Estimated cost for `distance_km`.
    pub fn cost(&self, distance_km: f64) -> f64 {
        distance_km * self.cost_per_km
    }
}

/// Rounds `value` to `decimals` decimal places, half away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
