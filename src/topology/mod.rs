pub mod edge;
pub mod vertex;

pub use edge::{EdgeData, EdgeId};
pub use vertex::{VertexData, VertexId};

use crate::error::TopologyError;
use crate::geometry::{Edge, Endpoint};
use crate::math::{Matrix4, Point3};
use slotmap::SlotMap;

/// Arena that owns the vertices and edges a selection refers to.
///
/// Entities reference each other via typed IDs (generational indices), which
/// also gives vertices a stable identity independent of their coordinates.
#[derive(Debug, Default)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
}

impl TopologyStore {
    /// Creates a new, empty topology store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    // --- Edge operations ---

    /// Inserts an edge and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if either vertex is not in the store.
    pub fn add_edge(&mut self, data: EdgeData) -> Result<EdgeId, TopologyError> {
        self.vertex(data.start)?;
        self.vertex(data.end)?;
        Ok(self.edges.insert(data))
    }

    /// Inserts two new vertices and the edge between them.
    pub fn add_segment(&mut self, start: Point3, end: Point3) -> EdgeId {
        let start = self.add_vertex(VertexData::new(start));
        let end = self.add_vertex(VertexData::new(end));
        self.edges.insert(EdgeData::new(start, end))
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Resolves an edge into its endpoints, mapped through `transform`.
    ///
    /// Pass the owning object's world matrix to get world-space positions.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or one of its vertices is not found.
    pub fn edge_geometry(&self, id: EdgeId, transform: &Matrix4) -> Result<Edge, TopologyError> {
        let edge = self.edge(id)?;
        let endpoint = |vertex: VertexId| -> Result<Endpoint, TopologyError> {
            let point = self.vertex(vertex)?.point;
            Ok(Endpoint::new(vertex, transform.transform_point(&point)))
        };
        Ok(Edge::new(endpoint(edge.start)?, endpoint(edge.end)?))
    }
}
