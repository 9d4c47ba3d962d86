//! Great-circle distance and the A* heuristics built on it.

use crate::location::{Coordinate, CoordinateStore};

/// Mean Earth radius.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates, in kilometers,
/// using the haversine formula.
pub fn distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat1 = from.latitude.into_inner().to_radians();
    let lat2 = to.latitude.into_inner().to_radians();
    let dlat = lat2 - lat1;
    let dlon = (to.longitude.into_inner() - from.longitude.into_inner()).to_radians();

    // Rounding can push `a` past 1 for nearly antipodal points.
    let a = ((dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Estimates the remaining distance between two cities.
///
/// Implementations must return a non-negative value. `f64::INFINITY`
/// means "no estimate": the city is then expanded after every city
/// with a finite estimate.
pub trait Heuristic {
    fn estimate(&self, from: &str, to: &str) -> f64;
}

/// Straight-line ("as the crow flies") distance between the two cities.
#[derive(Debug, Clone, Copy)]
pub struct GreatCircle<'a> {
    coordinates: &'a CoordinateStore,
}

impl<'a> GreatCircle<'a> {
    pub fn new(coordinates: &'a CoordinateStore) -> GreatCircle<'a> {
        GreatCircle { coordinates }
    }
}

impl Heuristic for GreatCircle<'_> {
    fn estimate(&self, from: &str, to: &str) -> f64 {
        match (self.coordinates.lookup(from), self.coordinates.lookup(to)) {
            (Some(from), Some(to)) => distance(&from, &to),
            _ => f64::INFINITY,
        }
    }
}

/// Always estimates zero. A* driven by this heuristic explores the
/// graph exactly like Dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _from: &str, _to: &str) -> f64 {
        0.0
    }
}
