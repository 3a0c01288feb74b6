use crate::error::GeometryError;
use crate::topology::EdgeId;

/// Two selected edges, ordered by importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSelection {
    primary: EdgeId,
    secondary: EdgeId,
}

impl EdgeSelection {
    /// Creates a selection with an explicit primary edge.
    #[must_use]
    pub fn new(primary: EdgeId, secondary: EdgeId) -> Self {
        Self { primary, secondary }
    }

    /// Orders a raw selection.
    ///
    /// The first selected edge is primary unless `active` names the other one,
    /// in which case the active edge takes precedence. An active edge outside
    /// the selection is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidEdgeCount`] unless exactly two edges are selected.
    pub fn from_selected(selected: &[EdgeId], active: Option<EdgeId>) -> Result<Self, GeometryError> {
        let &[first, second] = selected else {
            return Err(GeometryError::InvalidEdgeCount {
                count: selected.len(),
            });
        };
        if active == Some(second) && second != first {
            Ok(Self::new(second, first))
        } else {
            Ok(Self::new(first, second))
        }
    }

    /// Returns the primary edge.
    #[must_use]
    pub fn primary(&self) -> EdgeId {
        self.primary
    }

    /// Returns the secondary edge.
    #[must_use]
    pub fn secondary(&self) -> EdgeId {
        self.secondary
    }
}
