//! Resolving a cursor placement from two edges.

mod position;
mod sink;

pub use position::shared_vertex_position;
pub use sink::{Cursor, PlacementSink, RotationMode, RotationValue};

use crate::error::GeometryError;
use crate::geometry::Edge;
use crate::math::{basis_to_quaternion, Basis, Point3, UnitQuaternion};

/// The orientation and optional location to give the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorPlacement {
    /// The axis-snapped frame the rotation was built from.
    pub basis: Basis,
    /// Rotation taking the world axes onto `basis`.
    pub rotation: UnitQuaternion,
    /// New location, present only when position output was requested.
    pub position: Option<Point3>,
}

/// Two edges ordered by importance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePair {
    /// The edge whose direction is kept exactly.
    pub primary: Edge,
    /// The edge that only hints at the second axis.
    pub secondary: Edge,
}

impl EdgePair {
    /// Creates a new pair.
    #[must_use]
    pub fn new(primary: Edge, secondary: Edge) -> Self {
        Self { primary, secondary }
    }

    /// Resolves the pair into a placement. See [`resolve`].
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn resolve(&self, want_position: bool) -> Result<CursorPlacement, GeometryError> {
        resolve(&self.primary, &self.secondary, want_position)
    }
}

/// Resolves the cursor placement for a primary and a secondary edge.
///
/// The rotation maps the world axes onto the axis-snapped basis built from the
/// two edge directions (see [`Basis::from_directions`]). With `want_position`
/// the placement also carries the location picked by
/// [`shared_vertex_position`]; otherwise `position` is `None`.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateEdge`] if either edge has zero length,
/// [`GeometryError::NonFiniteEdge`] if a direction is NaN or infinite, or
/// [`GeometryError::CollinearEdges`] if the edges are parallel.
pub fn resolve(
    primary: &Edge,
    secondary: &Edge,
    want_position: bool,
) -> Result<CursorPlacement, GeometryError> {
    let basis = Basis::from_directions(&primary.direction(), &secondary.direction())?;
    let rotation = basis_to_quaternion(&basis);
    let position = want_position.then(|| shared_vertex_position(primary, secondary));
    Ok(CursorPlacement {
        basis,
        rotation,
        position,
    })
}
