//! Adjacency map handed to path search by a map-reading collaborator.

use std::collections::HashMap;
use std::fmt;

use crate::geom::{KeyError, Point};

/// Mapping from `"x,y"` node key to its ordered list of traversable
/// neighbor keys. Walls appear neither as keys nor as neighbors.
pub type Graph = HashMap<String, Vec<String>>;

/// Check that every key decodes as a [`Point`] and that every neighbor
/// reference is itself a key of `graph`.
///
/// Search does not run this check itself; a dangling neighbor is only
/// reported there if expansion actually reaches it.
pub fn validate(graph: &Graph) -> Result<(), GraphError> {
    // Sorted so the reported error does not depend on hash order.
    let mut keys: Vec<&String> = graph.keys().collect();
    keys.sort();

    for key in keys {
        key.parse::<Point>().map_err(|source| GraphError::InvalidKey {
            key: key.clone(),
            source,
        })?;
        for neighbor in &graph[key] {
            if !graph.contains_key(neighbor) {
                return Err(GraphError::DanglingNeighbor {
                    node: key.clone(),
                    neighbor: neighbor.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Number of nodes (traversable cells).
pub fn node_count(graph: &Graph) -> usize {
    graph.len()
}

/// Number of directed edges, i.e. the total length of all neighbor lists.
pub fn edge_count(graph: &Graph) -> usize {
    graph.values().map(Vec::len).sum()
}

/// Errors reported by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A key does not decode as `"x,y"`.
    InvalidKey { key: String, source: KeyError },
    /// `node` lists `neighbor`, which is not a key of the graph.
    DanglingNeighbor { node: String, neighbor: String },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey { key, .. } => write!(f, "graph: invalid node key {key:?}"),
            Self::DanglingNeighbor { node, neighbor } => {
                write!(f, "graph: node {node} lists unknown neighbor {neighbor}")
            }
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidKey { source, .. } => Some(source),
            Self::DanglingNeighbor { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(entries: Vec<(&str, Vec<&str>)>) -> Graph {
        entries
            .into_iter()
            .map(|(k, ns)| (k.to_string(), ns.into_iter().map(String::from).collect()))
            .collect()
    }

    #[test]
    fn valid_graph_passes() {
        let g = graph(vec![("0,0", vec!["1,0"]), ("1,0", vec!["0,0"])]);
        assert_eq!(validate(&g), Ok(()));
        assert_eq!(node_count(&g), 2);
        assert_eq!(edge_count(&g), 2);
    }

    #[test]
    fn empty_graph_is_valid() {
        assert_eq!(validate(&Graph::new()), Ok(()));
    }

    #[test]
    fn dangling_neighbor_reported() {
        let g = graph(vec![("0,0", vec!["1,0", "5,5"]), ("1,0", vec!["0,0"])]);
        assert_eq!(
            validate(&g),
            Err(GraphError::DanglingNeighbor {
                node: "0,0".to_string(),
                neighbor: "5,5".to_string(),
            })
        );
    }

    #[test]
    fn invalid_key_reported_with_source() {
        use std::error::Error;

        let g = graph(vec![("0,0", vec![]), ("wall", vec![])]);
        let err = validate(&g).unwrap_err();
        assert!(matches!(err, GraphError::InvalidKey { ref key, .. } if key == "wall"));
        assert!(err.source().is_some());
    }
}
