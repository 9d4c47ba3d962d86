//! Struct definitions and implementations for [`Coordinate`] and the
//! [`CoordinateStore`] that maps city names to coordinates.
//!
//! A city is identified by its name only. Its geographic position is
//! kept apart from the graph so that the graph stays a pure adjacency
//! structure and the position is only consulted by heuristics.

use std::collections::HashMap;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`Coordinate`] represents the geographic position of a city in
/// decimal degrees.
///
/// [`OrderedFloat`] is used so that coordinates can be compared and
/// hashed, the same way the graph weights are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: OrderedFloat<f64>,
    pub longitude: OrderedFloat<f64>,
}

impl Coordinate {
    /// Creates a new coordinate from decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    /// Returns `true` if the latitude is within [-90, 90] and the
    /// longitude within [-180, 180].
    pub fn is_valid(&self) -> bool {
        let (latitude, longitude) = (self.latitude.into_inner(), self.longitude.into_inner());
        (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)
    }
}

/// Read-only mapping from a city name to its [`Coordinate`].
#[derive(Debug, Clone, Default)]
pub struct CoordinateStore {
    coordinates: HashMap<String, Coordinate>,
}

impl CoordinateStore {
    /// Builds a store from `(name, coordinate)` pairs. A name listed
    /// twice keeps its last coordinate.
    pub fn new<I, S>(entries: I) -> CoordinateStore
    where
        I: IntoIterator<Item = (S, Coordinate)>,
        S: Into<String>,
    {
        CoordinateStore {
            coordinates: entries
                .into_iter()
                .map(|(name, coordinate)| (name.into(), coordinate))
                .collect(),
        }
    }

    /// Looks up the coordinate of a city.
    ///
    /// Returns [`None`] if the city has no known position.
    pub fn lookup(&self, location: &str) -> Option<Coordinate> {
        self.coordinates.get(location).copied()
    }

    /// Number of cities with a known position.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns `true` if no coordinate is stored.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}
