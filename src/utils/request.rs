//! Route requests as received from the transport layer.
//!
//! A request names an origin, a destination and an algorithm selector:
//! `"dijkstra"`, `"astar"` or `"compare"`. Validation happens before
//! any search is run.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    error::RequestError,
    result::{Algorithm, ComparisonResult, SearchResult},
    router::engine::Router,
};

/// Raw route request. Every field is optional so that a missing field
/// is reported as a [`RequestError::MissingField`] rather than a parse
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub algorithm: Option<String>,
}

impl RouteRequest {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        algorithm: impl Into<String>,
    ) -> RouteRequest {
        RouteRequest {
            origin: Some(origin.into()),
            destination: Some(destination.into()),
            algorithm: Some(algorithm.into()),
        }
    }

    /// Parses a request from a JSON body.
    pub fn from_json(body: &str) -> Result<RouteRequest, RequestError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Checks that every field is present and non-empty, and that the
    /// selector is known.
    pub fn validate(&self) -> Result<(&str, &str, Selector), RequestError> {
        let origin = required(&self.origin, "origin")?;
        let destination = required(&self.destination, "destination")?;
        let selector = required(&self.algorithm, "algorithm")?.parse::<Selector>()?;
        Ok((origin, destination, selector))
    }
}

fn required<'a>(field: &'a Option<String>, name: &'static str) -> Result<&'a str, RequestError> {
    match field.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(RequestError::MissingField(name)),
    }
}

/// What a request asks for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Selector {
    /// A single algorithm run.
    Single(Algorithm),
    /// Both algorithms, compared.
    Compare,
}

impl FromStr for Selector {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compare" => Ok(Selector::Compare),
            _ => s.parse().map(Selector::Single),
        }
    }
}

/// Result of a dispatched request.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    Single(SearchResult),
    Comparison(ComparisonResult),
}

/// Validates `request` and runs it against `router`.
pub fn dispatch(router: &Router, request: &RouteRequest) -> Result<RouteOutcome, RequestError> {
    let (origin, destination, selector) = request.validate().map_err(|err| {
        warn!("Rejected route request: {}", err);
        err
    })?;
    debug!("Route request {} -> {} ({:?})", origin, destination, selector);

    Ok(match selector {
        Selector::Single(algorithm) => {
            RouteOutcome::Single(router.find_path(origin, destination, algorithm))
        }
        Selector::Compare => RouteOutcome::Comparison(router.compare(origin, destination)),
    })
}

#[cfg(test)]
mod request_tests {
    use super::*;
    use crate::dataset::NetworkConfig;

    fn builtin_router() -> Router {
        Router::new(&NetworkConfig::builtin()).unwrap()
    }

    #[test]
    fn test_selector() {
        assert_eq!("compare".parse::<Selector>().unwrap(), Selector::Compare);
        assert_eq!(
            "astar".parse::<Selector>().unwrap(),
            Selector::Single(Algorithm::AStar)
        );
        assert!(matches!(
            "greedy".parse::<Selector>(),
            Err(RequestError::InvalidAlgorithm(_))
        ));
    }

    #[test]
    fn test_from_json() {
        let request = RouteRequest::from_json(
            r#"{"origin": "New York", "destination": "London", "algorithm": "dijkstra"}"#,
        )
        .unwrap();
        assert_eq!(request, RouteRequest::new("New York", "London", "dijkstra"));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = RouteRequest::from_json("{origin: New York").unwrap_err();
        assert!(matches!(err, RequestError::Malformed(_)));
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_missing_field() {
        let router = builtin_router();
        let request =
            RouteRequest::from_json(r#"{"origin": "New York", "algorithm": "astar"}"#).unwrap();

        let err = router.optimize(&request).unwrap_err();
        assert!(matches!(err, RequestError::MissingField("destination")));
        assert_eq!(err.to_string(), "missing required field `destination`");
    }

    #[test]
    fn test_empty_field_is_missing() {
        let request = RouteRequest::new("", "London", "dijkstra");
        assert!(matches!(
            request.validate(),
            Err(RequestError::MissingField("origin"))
        ));
    }

    #[test]
    fn test_invalid_algorithm() {
        let router = builtin_router();
        let err = router
            .optimize(&RouteRequest::new("New York", "London", "bfs"))
            .unwrap_err();
        assert!(matches!(err, RequestError::InvalidAlgorithm(ref s) if s == "bfs"));
    }

    #[test]
    fn test_dispatch_single() {
        let router = builtin_router();
        match router
            .optimize(&RouteRequest::new("New York", "London", "dijkstra"))
            .unwrap()
        {
            RouteOutcome::Single(result) => {
                assert_eq!(result.algorithm, Algorithm::Dijkstra);
                assert_eq!(result.path, vec!["New York", "London"]);
            }
            outcome => panic!("unexpected outcome {outcome:?}"),
        }
    }

    #[test]
    fn test_dispatch_compare() {
        let router = builtin_router();
        match router
            .optimize(&RouteRequest::new("Rome", "Hong Kong", "compare"))
            .unwrap()
        {
            RouteOutcome::Comparison(comparison) => {
                assert!(comparison.both_successful());
                assert_eq!(comparison.dijkstra.distance_km, 14770.0);
                assert_eq!(comparison.astar.distance_km, 14770.0);
            }
            outcome => panic!("unexpected outcome {outcome:?}"),
        }
    }

    #[test]
    fn test_unknown_city_is_not_a_request_error() {
        let router = builtin_router();
        let outcome = router
            .optimize(&RouteRequest::new("Nowhere", "Tokyo", "dijkstra"))
            .unwrap();
        assert!(matches!(outcome, RouteOutcome::Single(ref result) if !result.success));
    }
}
