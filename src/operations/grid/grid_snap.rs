use tracing::{debug, warn};

use crate::error::{Result, SelectionError};
use crate::math::Axis;
use crate::topology::{MeshStore, VertexId};

use super::{quantize, GridSettings};

/// Snaps the selected vertices to the grid along one axis.
pub struct GridSnap {
    axis: Axis,
    on_minor: bool,
    grid: GridSettings,
}

impl GridSnap {
    /// Creates a new `GridSnap` operation.
    #[must_use]
    pub fn new(axis: Axis, on_minor: bool, grid: GridSettings) -> Self {
        Self {
            axis,
            on_minor,
            grid,
        }
    }

    /// Computes the snapped coordinate of every selected vertex without
    /// touching the mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid settings are invalid or no vertex is
    /// selected.
    pub fn plan(&self, store: &MeshStore) -> Result<Vec<(VertexId, f64)>> {
        self.grid.validate()?;
        let selected = store.selected_vertices();
        if selected.is_empty() {
            return Err(SelectionError::NoSelection("vertices").into());
        }

        let m = self.grid.multiplier(self.on_minor);
        let i = self.axis.index();
        let mut plan = Vec::with_capacity(selected.len());
        for id in selected {
            plan.push((id, quantize(store.vertex(id)?.point[i], m)));
        }
        Ok(plan)
    }

    /// Executes the snap, returning the number of vertices moved onto the grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid settings are invalid or no vertex is
    /// selected. The mesh is unchanged on error.
    pub fn execute(&self, store: &mut MeshStore) -> Result<usize> {
        let plan = self.plan(store).inspect_err(|err| {
            warn!(%err, axis = %self.axis, "grid snap aborted");
        })?;
        let i = self.axis.index();
        for &(id, coord) in &plan {
            store.vertex_mut(id)?.point[i] = coord;
        }
        debug!(
            axis = %self.axis,
            on_minor = self.on_minor,
            count = plan.len(),
            "snapped vertices to grid"
        );
        Ok(plan.len())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::QuickmapError;
    use crate::math::Point3;
    use approx::assert_relative_eq;

    fn quarter_grid() -> GridSettings {
        GridSettings::new(1.0, 4).unwrap()
    }

    #[test]
    fn minor_snap_on_x() {
        let mut store = MeshStore::new();
        let v = store.add_vertex(Point3::new(0.3, 0.3, 0.3));
        store.set_vertex_selected(v, true).unwrap();

        let moved = GridSnap::new(Axis::X, true, quarter_grid())
            .execute(&mut store)
            .unwrap();

        assert_eq!(moved, 1);
        let point = store.vertex(v).unwrap().point;
        assert_relative_eq!(point.x, 0.25);
        assert_relative_eq!(point.y, 0.3);
        assert_relative_eq!(point.z, 0.3);
    }

    #[test]
    fn major_snap_ignores_subdivisions() {
        let mut store = MeshStore::new();
        let v = store.add_vertex(Point3::new(0.0, 1.6, 0.0));
        store.set_vertex_selected(v, true).unwrap();

        GridSnap::new(Axis::Y, false, quarter_grid())
            .execute(&mut store)
            .unwrap();

        assert_relative_eq!(store.vertex(v).unwrap().point.y, 2.0);
    }

    #[test]
    fn unselected_vertices_untouched() {
        let mut store = MeshStore::new();
        let a = store.add_vertex(Point3::new(0.3, 0.0, 0.0));
        let b = store.add_vertex(Point3::new(0.3, 0.0, 0.0));
        store.set_vertex_selected(a, true).unwrap();

        GridSnap::new(Axis::X, true, quarter_grid())
            .execute(&mut store)
            .unwrap();

        assert_relative_eq!(store.vertex(b).unwrap().point.x, 0.3);
    }

    #[test]
    fn snapping_twice_changes_nothing() {
        let mut store = MeshStore::new();
        let ids: Vec<_> = [0.3, -1.13, 7.9, 0.125]
            .into_iter()
            .map(|z| store.add_vertex(Point3::new(0.0, 0.0, z)))
            .collect();
        for &id in &ids {
            store.set_vertex_selected(id, true).unwrap();
        }
        let op = GridSnap::new(Axis::Z, true, GridSettings::new(0.5, 3).unwrap());
        op.execute(&mut store).unwrap();
        let first: Vec<f64> = ids.iter().map(|&id| store.vertex(id).unwrap().point.z).collect();
        op.execute(&mut store).unwrap();
        let second: Vec<f64> = ids.iter().map(|&id| store.vertex(id).unwrap().point.z).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn nothing_selected_is_reported() {
        let mut store = MeshStore::new();
        store.add_vertex(Point3::new(0.3, 0.0, 0.0));
        let err = GridSnap::new(Axis::X, true, quarter_grid())
            .execute(&mut store)
            .unwrap_err();
        assert!(matches!(
            err,
            QuickmapError::Selection(SelectionError::NoSelection(_))
        ));
    }

    #[test]
    fn invalid_grid_is_rejected_before_mutation() {
        let mut store = MeshStore::new();
        let v = store.add_vertex(Point3::new(0.3, 0.0, 0.0));
        store.set_vertex_selected(v, true).unwrap();
        let grid = GridSettings {
            scale: 0.0,
            subdivisions: 4,
        };
        let err = GridSnap::new(Axis::X, true, grid).execute(&mut store).unwrap_err();
        assert!(matches!(err, QuickmapError::Config(_)));
        assert_relative_eq!(store.vertex(v).unwrap().point.x, 0.3);
    }
}
