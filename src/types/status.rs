//! Definition for the [`SearchFailure`] type, implemented by an enum.

use thiserror::Error;

/// Reason why a search did not reach its destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum SearchFailure {
    /// The origin or the destination is not a city of the graph.
    #[error("unknown location `{0}`")]
    UnknownLocation(String),

    /// Both cities exist but no route connects them.
    #[error("destination is unreachable")]
    Unreachable,
}
