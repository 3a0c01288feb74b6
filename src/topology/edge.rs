use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the topology store.
    pub struct EdgeId;
}

/// A straight mesh edge between two vertices.
///
/// The order of the vertices gives the edge its direction (`start → end`).
#[derive(Debug, Clone, Copy)]
pub struct EdgeData {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge.
    pub end: VertexId,
}

impl EdgeData {
    /// Creates a new edge from `start` to `end`.
    #[must_use]
    pub fn new(start: VertexId, end: VertexId) -> Self {
        Self { start, end }
    }
}
