mod params;
mod selection;

pub use params::AlignParams;
pub use selection::EdgeSelection;

use tracing::{debug, warn};

use crate::error::Result;
use crate::placement::{resolve, CursorPlacement, PlacementSink};
use crate::topology::{EdgeId, TopologyStore};

/// Rotates a cursor so its axes follow two selected edges.
pub struct AlignCursorToEdges {
    selection: EdgeSelection,
    params: AlignParams,
}

impl AlignCursorToEdges {
    /// Creates a new `AlignCursorToEdges` operation.
    #[must_use]
    pub fn new(selection: EdgeSelection, params: AlignParams) -> Self {
        Self { selection, params }
    }

    /// Creates the operation from a raw selection and the active edge.
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly two edges are selected.
    pub fn from_selected(
        selected: &[EdgeId],
        active: Option<EdgeId>,
        params: AlignParams,
    ) -> Result<Self> {
        let selection = EdgeSelection::from_selected(selected, active).inspect_err(|err| {
            warn!(%err, "cannot align cursor");
        })?;
        Ok(Self::new(selection, params))
    }

    /// Returns the ordered selection.
    #[must_use]
    pub fn selection(&self) -> &EdgeSelection {
        &self.selection
    }

    /// Executes the alignment and writes the result to `sink`.
    ///
    /// On error the sink is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge is not in the store, has zero length, or if
    /// the two edges are collinear.
    pub fn execute<S>(&self, store: &TopologyStore, sink: &mut S) -> Result<CursorPlacement>
    where
        S: PlacementSink + ?Sized,
    {
        let transform = &self.params.world_transform;
        let primary = store.edge_geometry(self.selection.primary(), transform)?;
        let secondary = store.edge_geometry(self.selection.secondary(), transform)?;

        let placement = resolve(&primary, &secondary, self.params.move_position)
            .inspect_err(|err| warn!(%err, "cannot align cursor"))?;
        sink.apply(&placement);

        debug!(
            rotation = ?placement.rotation.coords,
            position = ?placement.position,
            "aligned cursor to edges"
        );
        Ok(placement)
    }
}
