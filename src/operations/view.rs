use tracing::{debug, warn};

use crate::error::{HostError, Result};
use crate::host::Viewport;
use crate::math::{newell_normal, UnitQuaternion, Vector3};
use crate::topology::MeshStore;

/// Turns the viewport to look straight at the active face.
pub struct AlignViewToFace;

impl AlignViewToFace {
    /// Creates a new `AlignViewToFace` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the alignment, returning the rotation handed to the viewport.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::AttributeUnavailable`] if the mesh has no active
    /// face, or a mesh error if the face has no area.
    pub fn execute<V: Viewport + ?Sized>(
        &self,
        store: &MeshStore,
        viewport: &mut V,
    ) -> Result<UnitQuaternion> {
        let normal = active_face_normal(store).inspect_err(|err| {
            warn!(%err, "align view to face aborted");
        })?;
        let rotation = view_rotation_for_normal(&normal);
        viewport.set_view_rotation(rotation);
        debug!(?normal, "aligned view to face normal");
        Ok(rotation)
    }
}

fn active_face_normal(store: &MeshStore) -> Result<Vector3> {
    let face = store
        .active_face()
        .ok_or_else(|| HostError::AttributeUnavailable("active face".into()))?;
    Ok(newell_normal(&store.face_points(face)?)?)
}

impl Default for AlignViewToFace {
    fn default() -> Self {
        Self::new()
    }
}

/// View orientation looking along `-normal`, with the view's up axis
/// pointing toward world +Z.
///
/// The view looks down its local -Z axis. When `normal` is vertical, world
/// +Y is used as the up hint instead, which gives the usual top and bottom
/// views.
#[must_use]
pub fn view_rotation_for_normal(normal: &Vector3) -> UnitQuaternion {
    let up = if normal.cross(&Vector3::z()).norm() < 1e-6 {
        Vector3::y()
    } else {
        Vector3::z()
    };
    UnitQuaternion::face_towards(normal, &up)
}
