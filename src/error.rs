//! Error types returned by graph construction, cycle queries and
//! topological sorting.
//!
//! Vertex labels are rendered with their `Debug` representation so that the
//! error type does not need to be generic over the label type.

use thiserror::Error;

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by `DirectedGraph`, `CycleAnalyzer` and
/// `TopologicalSequencer`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An edge endpoint was never added as a vertex
    #[error("unknown vertex {vertex}: add it before adding edges to it")]
    UnknownVertex {
        /// The missing endpoint
        vertex: String,
    },

    /// A query named a vertex that is not part of the graph
    #[error("vertex {vertex} not found in graph")]
    VertexNotFound {
        /// The vertex that was looked up
        vertex: String,
    },

    /// A topological order was requested for a graph that contains a cycle
    #[error("graph contains a cycle: {} vertices could not be ordered", .remaining.len())]
    CyclicGraph {
        /// Vertices that were never emitted, in insertion order
        remaining: Vec<String>,
    },
}

impl Error {
    pub(crate) fn unknown_vertex<Q: std::fmt::Debug + ?Sized>(vertex: &Q) -> Self {
        Error::UnknownVertex { vertex: format!("{:?}", vertex) }
    }

    pub(crate) fn vertex_not_found<Q: std::fmt::Debug + ?Sized>(vertex: &Q) -> Self {
        Error::VertexNotFound { vertex: format!("{:?}", vertex) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_quote_the_vertex() {
        assert_eq!(
            Error::unknown_vertex("Dev_Reset").to_string(),
            "unknown vertex \"Dev_Reset\": add it before adding edges to it"
        );
        assert_eq!(
            Error::vertex_not_found(&7u32).to_string(),
            "vertex 7 not found in graph"
        );
    }

    #[test]
    fn cyclic_graph_counts_remaining_vertices() {
        let err = Error::CyclicGraph {
            remaining: vec!["\"a\"".to_string(), "\"b\"".to_string()]
        };
        assert_eq!(err.to_string(), "graph contains a cycle: 2 vertices could not be ordered");
    }
}
