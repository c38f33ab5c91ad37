use tracing::{debug, warn};

use crate::error::{Result, SelectionError};
use crate::math::Axis;
use crate::topology::{MeshStore, VertexId};

use super::SnapTarget;

/// Moves the selected vertices onto the active element along one axis.
///
/// Only the chosen coordinate changes. Running it again with the same
/// active element and selection leaves the mesh as it is.
pub struct AlignToActive {
    axis: Axis,
}

impl AlignToActive {
    /// Creates a new `AlignToActive` operation.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }

    /// Executes the alignment, returning the number of vertices aligned.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::NoSelection`] if no vertex is selected and
    /// [`SelectionError::NoAnchor`] if nothing is active. The mesh is
    /// unchanged on error.
    pub fn execute(&self, store: &mut MeshStore) -> Result<usize> {
        align_axes(store, &[self.axis])
    }
}

/// Aligns the selected vertices to the active element on both X and Y.
///
/// The anchor is resolved once, before either axis moves, so an edge or
/// face anchor whose own vertices are selected still applies its original
/// geometry to Y.
pub struct AlignHorizontal;

impl AlignHorizontal {
    /// Creates a new `AlignHorizontal` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the alignment, returning the number of vertices aligned.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AlignToActive::execute`].
    pub fn execute(&self, store: &mut MeshStore) -> Result<usize> {
        align_axes(store, &[Axis::X, Axis::Y])
    }
}

impl Default for AlignHorizontal {
    fn default() -> Self {
        Self::new()
    }
}

fn align_axes(store: &mut MeshStore, axes: &[Axis]) -> Result<usize> {
    let selected: Vec<VertexId> = store.selected_vertices();
    if selected.is_empty() {
        warn!("align to active: no vertices selected");
        return Err(SelectionError::NoSelection("vertices").into());
    }
    let target = SnapTarget::from_active(store).inspect_err(|err| {
        warn!(%err, "align to active: no snap target");
    })?;

    for &id in &selected {
        let point = &mut store.vertex_mut(id)?.point;
        for &axis in axes {
            point[axis.index()] = target.coord(axis);
        }
    }
    debug!(
        ?axes,
        anchor = ?target.source,
        count = selected.len(),
        "aligned vertices to active element"
    );
    Ok(selected.len())
}
