use crate::error::MeshError;

use super::{Point3, Vector3, TOLERANCE};

/// Arithmetic mean of a polygon's vertex positions.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn median_center(points: &[Point3]) -> Option<Point3> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    Some(Point3::from(sum / n))
}

/// Midpoint of the segment `a`-`b`.
#[must_use]
pub fn midpoint(a: &Point3, b: &Point3) -> Point3 {
    nalgebra::center(a, b)
}

/// Computes the unit normal of a polygon using Newell's method.
///
/// Works for non-planar and concave polygons; winding order decides the sign.
///
/// # Errors
///
/// Returns [`MeshError::Degenerate`] if the polygon has no area.
pub fn newell_normal(points: &[Point3]) -> Result<Vector3, MeshError> {
    let n = points.len();
    let mut normal = Vector3::new(0.0, 0.0, 0.0);
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    normal
        .try_normalize(TOLERANCE)
        .ok_or_else(|| MeshError::Degenerate("polygon has no area".into()))
}
