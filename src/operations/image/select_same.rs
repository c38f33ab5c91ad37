use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::error::{MeshError, Result, SelectionError};
use crate::topology::{ActiveElement, FaceId, ImageKey, MeshAdjacency, MeshStore};

/// Which faces sharing the anchor's image are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Every face in the mesh with the same image.
    Global,
    /// Only faces reachable from the anchor through shared edges, where
    /// every face along the way also has the same image.
    Linked,
}

/// Picks the face whose image the selection is grown from.
///
/// The active element wins when it is a face. Otherwise the first
/// selected face by index is used.
///
/// # Errors
///
/// Returns [`SelectionError::NoSelection`] if no face is active or selected.
pub fn resolve_anchor_face(store: &MeshStore) -> Result<FaceId> {
    if let Some(ActiveElement::Face(id)) = store.active_element() {
        return Ok(id);
    }
    store
        .faces()
        .find(|(_, face)| face.selected)
        .map(|(id, _)| id)
        .ok_or_else(|| SelectionError::NoSelection("faces").into())
}

/// All faces whose image equals `key`; `None` matches image-less faces.
#[must_use]
pub fn faces_with_image(adjacency: &MeshAdjacency<'_>, key: Option<&ImageKey>) -> BTreeSet<FaceId> {
    adjacency
        .faces()
        .filter(|(_, face)| face.has_image(key))
        .map(|(id, _)| id)
        .collect()
}

/// Faces with image `key` connected to `anchor` through matching faces.
///
/// Expands one frontier at a time. A face joins the result only if it
/// matches, and only matching faces pass the search on to their
/// neighbours, so a strip of other faces blocks it even one face wide.
///
/// # Errors
///
/// Returns an error if a face reached by the search is missing.
pub fn linked_faces_with_image(
    adjacency: &MeshAdjacency<'_>,
    anchor: FaceId,
    key: Option<&ImageKey>,
) -> std::result::Result<BTreeSet<FaceId>, MeshError> {
    let store = adjacency.store();
    let mut visited = BTreeSet::new();
    let mut frontier = vec![anchor];

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for face_id in frontier {
            if visited.contains(&face_id) {
                continue;
            }
            let face = store.face(face_id)?;
            if !face.has_image(key) {
                continue;
            }
            visited.insert(face_id);
            for &edge in &face.edges {
                next.extend(
                    adjacency
                        .incident_faces(edge)
                        .iter()
                        .filter(|f| !visited.contains(*f)),
                );
            }
        }
        frontier = next;
    }

    Ok(visited)
}

/// Adds faces sharing the anchor face's image to the selection.
///
/// Existing selection flags are never cleared.
pub struct SelectSameImage {
    mode: MatchMode,
}

impl SelectSameImage {
    /// Creates a new `SelectSameImage` operation.
    #[must_use]
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    /// Computes the matching faces without touching the mesh.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidMesh`] for a mesh without faces and
    /// [`SelectionError::NoSelection`] if no anchor face can be resolved.
    pub fn plan(&self, store: &MeshStore) -> Result<BTreeSet<FaceId>> {
        let adjacency = MeshAdjacency::new(store)?;
        let anchor = resolve_anchor_face(store)?;
        let key = adjacency.image_key(anchor)?;

        let faces = match self.mode {
            MatchMode::Global => faces_with_image(&adjacency, key),
            MatchMode::Linked => linked_faces_with_image(&adjacency, anchor, key)?,
        };
        Ok(faces)
    }

    /// Executes the selection, returning the matching faces.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SelectSameImage::plan`]; the mesh is unchanged
    /// on error.
    pub fn execute(&self, store: &mut MeshStore) -> Result<BTreeSet<FaceId>> {
        let faces = self.plan(store).inspect_err(|err| {
            warn!(%err, mode = ?self.mode, "select same image aborted");
        })?;
        for &id in &faces {
            store.set_face_selected(id, true)?;
        }
        debug!(mode = ?self.mode, count = faces.len(), "selected faces with same image");
        Ok(faces)
    }
}
