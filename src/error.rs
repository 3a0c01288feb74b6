use thiserror::Error;

/// Top-level error type for cursor alignment.
#[derive(Debug, Error)]
pub enum AlignError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors raised while resolving a basis from two edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("need to select two edges, got {count}")]
    InvalidEdgeCount { count: usize },

    #[error("edge has zero length")]
    DegenerateEdge,

    #[error("edge direction is not finite")]
    NonFiniteEdge,

    #[error("edges must not be collinear")]
    CollinearEdges,
}

/// Errors related to the vertex/edge arena.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Convenience type alias for results using [`AlignError`].
pub type Result<T> = std::result::Result<T, AlignError>;
