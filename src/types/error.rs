//! Error types for the graph engine.

use thiserror::Error;

use super::Vertex;

/// All errors that can occur in the graph engine.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A supplied vertex id is outside `[0, n)`.
    #[error("Vertex {vertex} out of range for graph with {vertex_count} vertices")]
    OutOfRange { vertex: Vertex, vertex_count: usize },

    /// An edge references an out-of-range vertex at construction time.
    #[error("Edge ({from}, {to}) references a vertex outside [0, {vertex_count})")]
    InvalidEdge {
        from: Vertex,
        to: Vertex,
        vertex_count: usize,
    },

    /// An edge weight is NaN or infinite.
    #[error("Edge ({from}, {to}) has a non-finite weight")]
    InvalidWeight { from: Vertex, to: Vertex },

    /// Dijkstra or A* invoked on a graph containing a negative edge weight.
    #[error("Negative weight on edge ({from}, {to})")]
    NegativeWeight { from: Vertex, to: Vertex },

    /// A cycle with negative total weight was found.
    #[error("Negative-weight cycle detected")]
    NegativeCycleDetected,

    /// Relaxing an edge produced a distance below the weight type's range.
    #[error("Distance underflow relaxing edge ({from}, {to})")]
    DistanceUnderflow { from: Vertex, to: Vertex },

    /// Topological sort attempted on a graph that is not a DAG.
    #[error("Cycle detected: {unresolved} vertices could not be ordered")]
    CycleDetected { unresolved: usize },

    /// An odd cycle prevents 2-coloring.
    #[error("Graph is not bipartite: edge ({from}, {to}) joins same-colored vertices")]
    NotBipartite { from: Vertex, to: Vertex },

    /// The worker pool for parallel queries could not be created.
    #[error("Worker pool error: {0}")]
    WorkerPool(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph engine operations.
pub type GraphResult<T> = Result<T, GraphError>;
