//! The core of the router library.
//!
//! The engine module builds a graph given a network description. Path
//! finding algorithms are also provided to find the shortest route
//! between two cities, or to compare two algorithms on the same query.

/// The router engine module.
pub mod engine {
    use crate::{
        algorithms::{astar::astar, compare::compare, dijkstra::dijkstra, graph::FlightGraph},
        dataset::NetworkConfig,
        error::{ConfigError, RequestError},
        haversine::GreatCircle,
        location::CoordinateStore,
        metrics::MetricRates,
        request::{dispatch, RouteOutcome, RouteRequest},
        result::{Algorithm, ComparisonResult, SearchResult},
    };

    /// A Router owns the flight graph, the coordinates used by the A*
    /// heuristic and the rates used to derive time and cost.
    ///
    /// A Router is immutable once built and can be shared across
    /// threads by reference.
    #[derive(Debug, Clone)]
    pub struct Router {
        graph: FlightGraph,
        coordinates: CoordinateStore,
        rates: MetricRates,
    }

    impl Router {
        /// Creates a new router from a network description.
        ///
        /// # Errors
        /// Returns a [`ConfigError`] if the description is invalid.
        pub fn new(config: &NetworkConfig) -> Result<Router, ConfigError> {
            info!("[1/3] Validating the network description...");
            config.validate()?;

            info!("[2/3] Building the graph...");
            let graph = FlightGraph::new(&config.routes);

            info!("[3/3] Loading coordinates...");
            let coordinates = CoordinateStore::new(
                config
                    .cities
                    .iter()
                    .map(|city| (city.name.clone(), city.coordinate())),
            );
            for location in graph.all_locations() {
                if coordinates.lookup(location).is_none() {
                    warn!("{} has no coordinate, A* will expand it last", location);
                }
            }

            info!(
                "Router ready: {} cities, {} routes",
                graph.node_count(),
                graph.edge_count()
            );
            Ok(Router {
                graph,
                coordinates,
                rates: MetricRates::default(),
            })
        }

        /// Replaces the rates used to derive flight time and cost.
        pub fn with_rates(mut self, rates: MetricRates) -> Router {
            self.rates = rates;
            self
        }

        pub fn rates(&self) -> &MetricRates {
            &self.rates
        }

        pub fn graph(&self) -> &FlightGraph {
            &self.graph
        }

        pub fn coordinates(&self) -> &CoordinateStore {
            &self.coordinates
        }

        /// The great-circle heuristic over this router's coordinates.
        pub fn heuristic(&self) -> GreatCircle<'_> {
            GreatCircle::new(&self.coordinates)
        }

        /// All cities of the network in lexicographic order.
        pub fn list_locations(&self) -> Vec<&str> {
            self.graph.all_locations()
        }

        /// Find the shortest route between two cities.
        ///
        /// # Arguments
        /// * `origin` - The city to start from.
        /// * `destination` - The city to end at.
        /// * `algorithm` - The algorithm to use.
        ///
        /// # Returns
        /// A [`SearchResult`]. Unknown cities and unreachable
        /// destinations yield a failed result, never a panic.
        pub fn find_path(
            &self,
            origin: &str,
            destination: &str,
            algorithm: Algorithm,
        ) -> SearchResult {
            match algorithm {
                Algorithm::Dijkstra => dijkstra(&self.graph, &self.rates, origin, destination),
                Algorithm::AStar => astar(
                    &self.graph,
                    &self.heuristic(),
                    &self.rates,
                    origin,
                    destination,
                ),
            }
        }

        /// Same as [`Router::find_path`] with the algorithm given by its
        /// selector (`"dijkstra"` or `"astar"`).
        ///
        /// # Errors
        /// [`RequestError::InvalidAlgorithm`] for any other selector.
        pub fn find_path_by_name(
            &self,
            origin: &str,
            destination: &str,
            algorithm: &str,
        ) -> Result<SearchResult, RequestError> {
            let algorithm: Algorithm = algorithm.parse()?;
            Ok(self.find_path(origin, destination, algorithm))
        }

        /// Runs both algorithms on the same query.
        pub fn compare(&self, origin: &str, destination: &str) -> ComparisonResult {
            compare(
                &self.graph,
                &self.heuristic(),
                &self.rates,
                origin,
                destination,
            )
        }

        /// Validates a route request and runs the search it asks for.
        pub fn optimize(&self, request: &RouteRequest) -> Result<RouteOutcome, RequestError> {
            dispatch(self, request)
        }
    }
}
