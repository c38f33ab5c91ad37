//! Read-only edge/face adjacency over a [`MeshStore`] snapshot.

use std::collections::HashMap;

use crate::error::MeshError;

use super::{EdgeData, EdgeId, FaceData, FaceId, ImageKey, MeshStore, VertexData, VertexId};

/// Edge-to-face incidence for one mesh snapshot.
///
/// Built once per operation. Manifoldness is not assumed: an edge may
/// border any number of faces.
#[derive(Debug)]
pub struct MeshAdjacency<'a> {
    store: &'a MeshStore,
    edge_faces: HashMap<EdgeId, Vec<FaceId>>,
}

impl<'a> MeshAdjacency<'a> {
    /// Derives adjacency from the current state of `store`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidMesh`] if the mesh has no faces.
    pub fn new(store: &'a MeshStore) -> Result<Self, MeshError> {
        if store.face_count() == 0 {
            return Err(MeshError::InvalidMesh("mesh has no faces".into()));
        }

        let mut edge_faces: HashMap<EdgeId, Vec<FaceId>> = HashMap::new();
        for (face_id, face) in store.faces() {
            for &edge in &face.edges {
                let incident = edge_faces.entry(edge).or_default();
                if !incident.contains(&face_id) {
                    incident.push(face_id);
                }
            }
        }

        Ok(Self { store, edge_faces })
    }

    /// The underlying mesh.
    #[must_use]
    pub fn store(&self) -> &'a MeshStore {
        self.store
    }

    /// All faces in index order.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &'a FaceData)> {
        self.store.faces()
    }

    /// All edges in index order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &'a EdgeData)> {
        self.store.edges()
    }

    /// All vertices in index order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &'a VertexData)> {
        self.store.vertices()
    }

    /// Faces bordering `edge`. Loose edges have none.
    #[must_use]
    pub fn incident_faces(&self, edge: EdgeId) -> &[FaceId] {
        self.edge_faces.get(&edge).map_or(&[], Vec::as_slice)
    }

    /// Faces sharing at least one edge with `face`, excluding `face` itself.
    ///
    /// A neighbour reached through several edges is listed once.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not found.
    pub fn neighbors(&self, face: FaceId) -> Result<Vec<FaceId>, MeshError> {
        let mut out = Vec::new();
        for &edge in &self.store.face(face)?.edges {
            for &other in self.incident_faces(edge) {
                if other != face && !out.contains(&other) {
                    out.push(other);
                }
            }
        }
        Ok(out)
    }

    /// The image assigned to `face`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not found.
    pub fn image_key(&self, face: FaceId) -> Result<Option<&'a ImageKey>, MeshError> {
        Ok(self.store.face(face)?.image.as_ref())
    }
}
