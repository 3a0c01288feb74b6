use crate::geometry::Edge;
use crate::math::Point3;

/// Picks the cursor location for an edge pair.
///
/// Returns the primary edge's end point when that vertex is also an endpoint of
/// the secondary edge, and the primary edge's start point otherwise. Vertices
/// are matched by identity: two distinct vertices at the same coordinates are
/// not considered shared.
#[must_use]
pub fn shared_vertex_position(primary: &Edge, secondary: &Edge) -> Point3 {
    if secondary.has_vertex(primary.end().vertex) {
        primary.end().point
    } else {
        primary.start().point
    }
}
