use tracing::{debug, warn};

use crate::error::{Result, SelectionError};
use crate::math::{Axis, Point3};
use crate::topology::{MeshStore, VertexId};

use super::{quantize, GridSettings};

/// Snaps the selected vertices to the minor grid on all three axes.
pub struct SnapToMinorGrid {
    grid: GridSettings,
}

impl SnapToMinorGrid {
    /// Creates a new `SnapToMinorGrid` operation.
    #[must_use]
    pub fn new(grid: GridSettings) -> Self {
        Self { grid }
    }

    /// Computes the snapped position of every selected vertex without
    /// touching the mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid settings are invalid or no vertex is
    /// selected.
    pub fn plan(&self, store: &MeshStore) -> Result<Vec<(VertexId, Point3)>> {
        self.grid.validate()?;
        let selected = store.selected_vertices();
        if selected.is_empty() {
            return Err(SelectionError::NoSelection("vertices").into());
        }

        let m = self.grid.multiplier(true);
        let mut plan = Vec::with_capacity(selected.len());
        for id in selected {
            let mut point = store.vertex(id)?.point;
            for axis in Axis::ALL {
                let i = axis.index();
                point[i] = quantize(point[i], m);
            }
            plan.push((id, point));
        }
        Ok(plan)
    }

    /// Executes the snap, returning the number of vertices moved.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SnapToMinorGrid::plan`]; the mesh is unchanged
    /// on error.
    pub fn execute(&self, store: &mut MeshStore) -> Result<usize> {
        let plan = self.plan(store).inspect_err(|err| {
            warn!(%err, "snap to minor grid aborted");
        })?;
        for &(id, point) in &plan {
            store.vertex_mut(id)?.point = point;
        }
        debug!(count = plan.len(), "snapped vertices to minor grid");
        Ok(plan.len())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::QuickmapError;
    use approx::assert_relative_eq;

    #[test]
    fn snaps_every_axis() {
        let mut store = MeshStore::new();
        let v = store.add_vertex(Point3::new(0.3, 1.04, -0.61));
        store.set_vertex_selected(v, true).unwrap();

        SnapToMinorGrid::new(GridSettings::new(1.0, 10).unwrap())
            .execute(&mut store)
            .unwrap();

        assert_relative_eq!(store.vertex(v).unwrap().point, Point3::new(0.3, 1.0, -0.6));
    }

    #[test]
    fn empty_selection_reported() {
        let mut store = MeshStore::new();
        store.add_vertex(Point3::origin());
        assert!(SnapToMinorGrid::new(GridSettings::default())
            .execute(&mut store)
            .is_err());
    }

    #[test]
    fn plan_leaves_mesh_untouched() {
        let mut store = MeshStore::new();
        let v = store.add_vertex(Point3::new(0.26, 0.0, 0.74));
        store.set_vertex_selected(v, true).unwrap();

        let plan = SnapToMinorGrid::new(GridSettings::new(1.0, 4).unwrap())
            .plan(&store)
            .unwrap();

        assert_eq!(plan.len(), 1);
        assert_relative_eq!(plan[0].1, Point3::new(0.25, 0.0, 0.75));
        assert_relative_eq!(store.vertex(v).unwrap().point, Point3::new(0.26, 0.0, 0.74));
    }

    #[test]
    fn invalid_grid_aborts_before_moving() {
        let mut store = MeshStore::new();
        let v = store.add_vertex(Point3::new(0.3, 0.3, 0.3));
        store.set_vertex_selected(v, true).unwrap();
        let grid = GridSettings {
            scale: 0.0,
            subdivisions: 4,
        };

        let err = SnapToMinorGrid::new(grid).execute(&mut store).unwrap_err();
        assert!(matches!(err, QuickmapError::Config(_)));
        assert_relative_eq!(store.vertex(v).unwrap().point, Point3::new(0.3, 0.3, 0.3));
    }
}
