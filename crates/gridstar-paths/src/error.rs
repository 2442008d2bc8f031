use std::fmt;

use gridstar_core::KeyError;

/// Errors reported by path search before or during a search call.
///
/// An unreachable target is not an error; see
/// [`PathResult::is_reachable`](crate::PathResult::is_reachable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start, the target, or a neighbor reached during expansion is not
    /// a key of the graph.
    UnknownNode(String),
    /// No built-in heuristic has this name.
    InvalidHeuristic(String),
    /// A node key does not decode as `"x,y"`.
    InvalidKey { key: String, source: KeyError },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(key) => write!(f, "node {key} does not exist in the graph"),
            Self::InvalidHeuristic(name) => {
                write!(f, "invalid heuristic {name:?}: use \"manhattan\" or \"euclidean\"")
            }
            Self::InvalidKey { key, .. } => write!(f, "invalid node key {key:?}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidKey { source, .. } => Some(source),
            _ => None,
        }
    }
}
