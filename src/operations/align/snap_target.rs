use crate::error::{Result, SelectionError};
use crate::math::{median_center, midpoint, Axis, Point3};
use crate::topology::{ActiveElement, MeshStore};

/// The point selected vertices are aligned to, taken from the active element.
///
/// | Active element | Anchor point                       |
/// |----------------|------------------------------------|
/// | vertex         | its position                       |
/// | edge           | midpoint of its two vertices       |
/// | face           | mean of its vertex positions       |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapTarget {
    /// The element the target was taken from.
    pub source: ActiveElement,
    /// The anchor point at the time of resolution.
    pub point: Point3,
}

impl SnapTarget {
    /// Resolves the target from the mesh's active element.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::NoAnchor`] if nothing is active, or a mesh
    /// error if the active element refers to missing geometry.
    pub fn from_active(store: &MeshStore) -> Result<Self> {
        let source = store.active_element().ok_or(SelectionError::NoAnchor)?;
        Self::from_element(store, source)
    }

    /// Resolves the target for a specific element.
    ///
    /// # Errors
    ///
    /// Returns an error if the element or its vertices are missing.
    pub fn from_element(store: &MeshStore, source: ActiveElement) -> Result<Self> {
        let point = match source {
            ActiveElement::Vertex(id) => store.vertex(id)?.point,
            ActiveElement::Edge(id) => {
                let [a, b] = store.edge(id)?.vertices;
                midpoint(&store.vertex(a)?.point, &store.vertex(b)?.point)
            }
            ActiveElement::Face(id) => {
                let points = store.face_points(id)?;
                median_center(&points).ok_or(SelectionError::NoAnchor)?
            }
        };
        Ok(Self { source, point })
    }

    /// The target coordinate along `axis`.
    #[must_use]
    pub fn coord(&self, axis: Axis) -> f64 {
        self.point[axis.index()]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::QuickmapError;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn vertex_target_is_position() {
        let mut store = MeshStore::new();
        let v = store.add_vertex(p(1.0, 2.0, 3.0));
        store.pick(v).unwrap();
        let target = SnapTarget::from_active(&store).unwrap();
        assert_relative_eq!(target.coord(Axis::Z), 3.0);
        assert_eq!(target.source, ActiveElement::Vertex(v));
    }

    #[test]
    fn edge_target_is_midpoint() {
        let mut store = MeshStore::new();
        let a = store.add_vertex(p(0.0, 0.0, 0.0));
        let b = store.add_vertex(p(4.0, -2.0, 1.0));
        let e = store.add_edge(a, b).unwrap();
        store.pick(e).unwrap();
        let target = SnapTarget::from_active(&store).unwrap();
        assert_relative_eq!(target.point, p(2.0, -1.0, 0.5));
    }

    #[test]
    fn face_target_is_median_center() {
        let mut store = MeshStore::new();
        let v: Vec<_> = [p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(2.0, 2.0, 0.0), p(0.0, 2.0, 0.0)]
            .into_iter()
            .map(|pt| store.add_vertex(pt))
            .collect();
        let f = store.add_face(&v, None).unwrap();
        store.pick(f).unwrap();
        let target = SnapTarget::from_active(&store).unwrap();
        assert_relative_eq!(target.point, p(1.0, 1.0, 0.0));
    }

    #[test]
    fn latest_pick_decides_kind() {
        let mut store = MeshStore::new();
        let a = store.add_vertex(p(0.0, 0.0, 0.0));
        let b = store.add_vertex(p(2.0, 0.0, 0.0));
        let e = store.add_edge(a, b).unwrap();
        store.pick(e).unwrap();
        store.pick(b).unwrap();
        assert_relative_eq!(SnapTarget::from_active(&store).unwrap().coord(Axis::X), 2.0);
    }

    #[test]
    fn no_active_element() {
        let mut store = MeshStore::new();
        let v = store.add_vertex(p(1.0, 2.0, 3.0));
        store.set_vertex_selected(v, true).unwrap();
        let err = SnapTarget::from_active(&store).unwrap_err();
        assert!(matches!(
            err,
            QuickmapError::Selection(SelectionError::NoAnchor)
        ));
    }
}
