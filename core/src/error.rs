use thiserror::Error;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors produced by graph construction and query entry points.
///
/// Build-phase errors (`DuplicateVertex`, `InvalidVertex` from `add_edge`)
/// indicate corrupt input and abort the build. Query-time conditions like
/// "no path" or "unknown word" are ordinary values (`PathOutcome`,
/// `Option`), not errors — only an out-of-range vertex id or a failed name
/// resolution surfaces here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex id outside `[0, vertex_count)`.
    #[error("vertex id {id} out of range (graph has {vertex_count} vertices)")]
    InvalidVertex { id: usize, vertex_count: usize },

    /// A word was inserted twice.
    #[error("word '{0}' is already a vertex")]
    DuplicateVertex(String),

    /// A word could not be resolved to a vertex.
    #[error("word '{0}' not found")]
    NotFound(String),
}
