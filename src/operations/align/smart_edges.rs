use tracing::{debug, warn};

use crate::error::{Result, SelectionError};
use crate::math::{midpoint, Axis, Point3};
use crate::topology::{MeshStore, VertexId};

/// Straightens each selected edge along its dominant axis.
///
/// Both endpoints take the edge midpoint's coordinates on the two short
/// axes; the long-axis coordinate of each endpoint is kept. Edges are
/// processed in index order, so edges sharing a vertex see each other's
/// results.
pub struct SmartAlignEdges;

impl SmartAlignEdges {
    /// Creates a new `SmartAlignEdges` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the alignment, returning the number of edges straightened.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::NoSelection`] if no edge is selected.
    pub fn execute(&self, store: &mut MeshStore) -> Result<usize> {
        let endpoints = selected_endpoints(store).inspect_err(|err| {
            warn!(%err, "smart align edges aborted");
        })?;

        for &(a, b) in &endpoints {
            let pa = store.vertex(a)?.point;
            let pb = store.vertex(b)?.point;
            let mid = midpoint(&pa, &pb);
            let (s1, s2) = long_axis(&pa, &pb).others();
            for v in [a, b] {
                let point = &mut store.vertex_mut(v)?.point;
                point[s1.index()] = mid[s1.index()];
                point[s2.index()] = mid[s2.index()];
            }
        }
        debug!(count = endpoints.len(), "straightened edges");
        Ok(endpoints.len())
    }
}

/// Endpoints of every selected edge, resolved up front so a bad id aborts
/// before any vertex moves.
fn selected_endpoints(store: &MeshStore) -> Result<Vec<(VertexId, VertexId)>> {
    let selected = store.selected_edges();
    if selected.is_empty() {
        return Err(SelectionError::NoSelection("edges").into());
    }
    let mut endpoints = Vec::with_capacity(selected.len());
    for id in selected {
        let [a, b] = store.edge(id)?.vertices;
        store.vertex(a)?;
        store.vertex(b)?;
        endpoints.push((a, b));
    }
    Ok(endpoints)
}

impl Default for SmartAlignEdges {
    fn default() -> Self {
        Self::new()
    }
}

/// The axis along which `a` and `b` differ most.
///
/// Ties prefer X, then Y, then Z.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn long_axis(a: &Point3, b: &Point3) -> Axis {
    let d = (a - b).abs();
    let longest = d.x.max(d.y).max(d.z);
    if d.x == longest {
        Axis::X
    } else if d.y == longest {
        Axis::Y
    } else {
        Axis::Z
    }
}
