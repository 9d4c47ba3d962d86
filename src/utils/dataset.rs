//! Network descriptions: the cities, their coordinates and the routes
//! between them.
//!
//! A [`NetworkConfig`] is plain data. It is validated and turned into
//! an immutable [`Router`](crate::router::engine::Router) once, then
//! never touched again.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{edge::Edge, error::ConfigError, location::Coordinate};

/// A city and its position in decimal degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityConfig {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityConfig {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> CityConfig {
        CityConfig {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Description of a flight network.
///
/// Routes are directed: a return flight must be listed separately.
/// A city may appear in `routes` without being listed in `cities`, in
/// which case it has no coordinate and A* gets no guidance for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default)]
    pub cities: Vec<CityConfig>,
    #[serde(default)]
    pub routes: Vec<Edge>,
}

const BUILTIN_CITIES: &[(&str, f64, f64)] = &[
    ("New York", 40.7128, -74.0060),
    ("London", 51.5074, -0.1278),
    ("Paris", 48.8566, 2.3522),
    ("Tokyo", 35.6762, 139.6503),
    ("Dubai", 25.2048, 55.2708),
    ("Singapore", 1.3521, 103.8198),
    ("Sydney", -33.8688, 151.2093),
    ("Los Angeles", 34.0522, -118.2437),
    ("Chicago", 41.8781, -87.6298),
    ("Frankfurt", 50.1109, 8.6821),
    ("Rome", 41.9028, 12.4964),
    ("Seoul", 37.5665, 126.9780),
    ("Mumbai", 19.0760, 72.8777),
    ("Hong Kong", 22.3193, 114.1694),
];

const BUILTIN_ROUTES: &[(&str, &str, f64)] = &[
    ("New York", "London", 5567.0),
    ("New York", "Paris", 5834.0),
    ("New York", "Tokyo", 10838.0),
    ("New York", "Dubai", 11069.0),
    ("New York", "Los Angeles", 3944.0),
    ("New York", "Chicago", 1147.0),
    ("London", "New York", 5567.0),
    ("London", "Paris", 344.0),
    ("London", "Dubai", 5492.0),
    ("London", "Singapore", 10876.0),
    ("London", "Frankfurt", 646.0),
    ("Paris", "New York", 5834.0),
    ("Paris", "London", 344.0),
    ("Paris", "Dubai", 5232.0),
    ("Paris", "Tokyo", 9713.0),
    ("Paris", "Rome", 1106.0),
    ("Tokyo", "New York", 10838.0),
    ("Tokyo", "Paris", 9713.0),
    ("Tokyo", "Dubai", 7820.0),
    ("Tokyo", "Singapore", 5308.0),
    ("Tokyo", "Sydney", 7816.0),
    ("Tokyo", "Los Angeles", 8807.0),
    ("Tokyo", "Seoul", 1157.0),
    ("Dubai", "New York", 11069.0),
    ("Dubai", "London", 5492.0),
    ("Dubai", "Paris", 5232.0),
    ("Dubai", "Tokyo", 7820.0),
    ("Dubai", "Singapore", 5844.0),
    ("Dubai", "Mumbai", 1934.0),
    ("Singapore", "London", 10876.0),
    ("Singapore", "Tokyo", 5308.0),
    ("Singapore", "Dubai", 5844.0),
    ("Singapore", "Sydney", 6302.0),
    ("Singapore", "Hong Kong", 2588.0),
    ("Sydney", "Singapore", 6302.0),
    ("Sydney", "Tokyo", 7816.0),
    ("Sydney", "Los Angeles", 12052.0),
    ("Los Angeles", "New York", 3944.0),
    ("Los Angeles", "Tokyo", 8807.0),
    ("Los Angeles", "Sydney", 12052.0),
    ("Los Angeles", "Chicago", 2806.0),
    ("Chicago", "New York", 1147.0),
    ("Chicago", "Los Angeles", 2806.0),
    ("Frankfurt", "London", 646.0),
    ("Frankfurt", "Paris", 486.0),
    ("Rome", "Paris", 1106.0),
    ("Seoul", "Tokyo", 1157.0),
    ("Mumbai", "Dubai", 1934.0),
    ("Hong Kong", "Singapore", 2588.0),
];

impl NetworkConfig {
    /// The default network: 14 major cities and 49 routes.
    pub fn builtin() -> NetworkConfig {
        NetworkConfig {
            cities: BUILTIN_CITIES
                .iter()
                .map(|&(name, latitude, longitude)| CityConfig::new(name, latitude, longitude))
                .collect(),
            routes: BUILTIN_ROUTES
                .iter()
                .map(|&(from, to, distance_km)| Edge::new(from, to, distance_km))
                .collect(),
        }
    }

    /// Parses a network description from a JSON document.
    pub fn from_json_str(json: &str) -> Result<NetworkConfig, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a network description from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<NetworkConfig, ConfigError> {
        info!("Reading network description from {:?}", path);
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut json = String::new();
        File::open(path)
            .map_err(io_error)?
            .read_to_string(&mut json)
            .map_err(io_error)?;
        NetworkConfig::from_json_str(&json)
    }

    /// Checks that every route has a positive finite distance and two
    /// distinct, non-empty endpoints, and that every city is named once
    /// with a coordinate in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::with_capacity(self.cities.len());
        for city in &self.cities {
            if city.name.is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if !names.insert(city.name.as_str()) {
                return Err(ConfigError::DuplicateCity(city.name.clone()));
            }
            if !city.coordinate().is_valid() {
                return Err(ConfigError::InvalidCoordinate {
                    name: city.name.clone(),
                    latitude: city.latitude,
                    longitude: city.longitude,
                });
            }
        }
        for route in &self.routes {
            if route.from.is_empty() || route.to.is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if route.from == route.to {
                return Err(ConfigError::SelfLoop(route.from.clone()));
            }
            let distance_km = route.distance_km.into_inner();
            if !distance_km.is_finite() || distance_km <= 0.0 {
                return Err(ConfigError::InvalidDistance {
                    from: route.from.clone(),
                    to: route.to.clone(),
                    distance_km,
                });
            }
        }
        Ok(())
    }
}
