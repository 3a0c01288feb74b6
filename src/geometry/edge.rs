use crate::math::{Point3, Vector3};
use crate::topology::VertexId;

/// One end of an edge: a vertex identity and its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoint {
    /// Identity of the vertex, used to detect shared vertices.
    pub vertex: VertexId,
    /// Position of the vertex.
    pub point: Point3,
}

impl Endpoint {
    /// Creates a new endpoint.
    #[must_use]
    pub fn new(vertex: VertexId, point: Point3) -> Self {
        Self { vertex, point }
    }
}

/// A directed straight edge.
///
/// The direction is `end - start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    start: Endpoint,
    end: Endpoint,
}

impl Edge {
    /// Creates a new edge from `start` to `end`.
    #[must_use]
    pub fn new(start: Endpoint, end: Endpoint) -> Self {
        Self { start, end }
    }

    /// Returns the start endpoint.
    #[must_use]
    pub fn start(&self) -> &Endpoint {
        &self.start
    }

    /// Returns the end endpoint.
    #[must_use]
    pub fn end(&self) -> &Endpoint {
        &self.end
    }

    /// Returns the (unnormalized) direction `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.end.point - self.start.point
    }

    /// Returns `true` if `vertex` is one of this edge's endpoints.
    #[must_use]
    pub fn has_vertex(&self, vertex: VertexId) -> bool {
        self.start.vertex == vertex || self.end.vertex == vertex
    }
}
