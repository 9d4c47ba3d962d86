//! Error types returned at the public boundary of the library.
//!
//! A search that does not find a route is not an error: it yields a
//! failed [`SearchResult`](crate::result::SearchResult). Errors are
//! reserved for invalid network descriptions and invalid requests.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a network description.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read network file `{path:?}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse network description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("route {from} -> {to} has an invalid distance: {distance_km}")]
    InvalidDistance {
        from: String,
        to: String,
        distance_km: f64,
    },

    #[error("route from `{0}` to itself")]
    SelfLoop(String),

    #[error("city `{0}` is listed more than once")]
    DuplicateCity(String),

    #[error("a city or route endpoint has an empty name")]
    EmptyName,

    #[error("city `{name}` has an invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate {
        name: String,
        latitude: f64,
        longitude: f64,
    },
}

/// Errors raised while validating a route request.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("malformed request: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid algorithm `{0}`")]
    InvalidAlgorithm(String),
}

impl RequestError {
    /// HTTP-equivalent status for the transport layer. Every request
    /// error is a client error.
    pub fn status_code(&self) -> u16 {
        400
    }
}
