//! Error types for archgraph-core
//!
//! Provides unified error handling across the crate. Findings such as
//! disconnected parents or unresolved tokens are not errors; they are
//! reported through return values and `tracing` warnings.

use thiserror::Error;

use crate::config::ConfigError;
use crate::shared::models::{EdgeId, VertexId};

/// Main error type for archgraph-core operations
#[derive(Debug, Error)]
pub enum ArchGraphError {
    /// A vertex handle does not reference a live vertex
    #[error("Vertex not found: {0}")]
    VertexNotFound(VertexId),

    /// An edge handle does not reference a live edge
    #[error("Edge not found: {0}")]
    EdgeNotFound(EdgeId),

    /// Cyclic input where a DAG is required
    #[error("Graph is not acyclic: {0} cyclic component(s) found. No computation can be performed.")]
    NotADag(usize),

    /// Malformed architecture specification
    #[error("Specification error: {0}")]
    Spec(String),

    /// Invalid caller-supplied argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failure inside a GraphStore or Renderer adapter
    #[error("Store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ArchGraphError {
    /// Create a specification error
    pub fn spec(msg: impl Into<String>) -> Self {
        ArchGraphError::Spec(msg.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        ArchGraphError::InvalidArgument(msg.into())
    }

    /// Wrap an adapter error
    pub fn store(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        ArchGraphError::Store(Box::new(err))
    }
}

/// Result type alias for archgraph operations
pub type Result<T> = std::result::Result<T, ArchGraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_not_found_display() {
        let err = ArchGraphError::VertexNotFound(VertexId(42));
        assert_eq!(err.to_string(), "Vertex not found: 42");
    }

    #[test]
    fn test_not_a_dag_display() {
        let err = ArchGraphError::NotADag(2);
        assert!(err.to_string().contains("not acyclic"));
        assert!(err.to_string().contains('2'));
    }

    #[test]
    fn test_store_error_keeps_source() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.dot");
        let err = ArchGraphError::store(io);
        assert!(err.source().unwrap().to_string().contains("missing.dot"));
    }
}
