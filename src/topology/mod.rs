pub mod adjacency;
pub mod edge;
pub mod face;
pub mod history;
pub mod vertex;

pub use adjacency::MeshAdjacency;
pub use edge::{EdgeData, EdgeId};
pub use face::{FaceData, FaceId, ImageKey};
pub use history::{ActiveElement, SelectHistory};
pub use vertex::{VertexData, VertexId};

use std::collections::{HashMap, HashSet};

use crate::error::MeshError;
use crate::math::Point3;
use slotmap::SlotMap;

/// Central arena that owns the edited mesh.
///
/// Elements reference each other via typed IDs (generational indices).
/// Iteration follows insertion order, which is what "first by index"
/// means throughout the crate. Edges are unique per unordered vertex
/// pair, so two faces sharing a boundary share the same [`EdgeId`].
#[derive(Debug, Default)]
pub struct MeshStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    faces: SlotMap<FaceId, FaceData>,
    edge_lookup: HashMap<(VertexId, VertexId), EdgeId>,
    history: SelectHistory,
    active_face: Option<FaceId>,
}

fn edge_key(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl MeshStore {
    /// Creates a new, empty mesh store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts an unselected vertex and returns its ID.
    pub fn add_vertex(&mut self, point: Point3) -> VertexId {
        self.vertices.insert(VertexData::new(point))
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, MeshError> {
        self.vertices
            .get(id)
            .ok_or_else(|| MeshError::EntityNotFound("vertex".into()))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, MeshError> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| MeshError::EntityNotFound("vertex".into()))
    }

    /// Iterates all vertices in index order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &VertexData)> {
        self.vertices.iter()
    }

    // --- Edge operations ---

    /// Returns the edge joining `a` and `b`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if either vertex is missing or `a == b`.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<EdgeId, MeshError> {
        self.vertex(a)?;
        self.vertex(b)?;
        if a == b {
            return Err(MeshError::InvalidMesh(
                "edge endpoints must be distinct".into(),
            ));
        }
        let key = edge_key(a, b);
        if let Some(&id) = self.edge_lookup.get(&key) {
            return Ok(id);
        }
        let id = self.edges.insert(EdgeData::new(a, b));
        self.edge_lookup.insert(key, id);
        Ok(id)
    }

    /// Looks up the edge joining `a` and `b` in either direction.
    #[must_use]
    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.edge_lookup.get(&edge_key(a, b)).copied()
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, MeshError> {
        self.edges
            .get(id)
            .ok_or_else(|| MeshError::EntityNotFound("edge".into()))
    }

    /// Returns a mutable reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge_mut(&mut self, id: EdgeId) -> Result<&mut EdgeData, MeshError> {
        self.edges
            .get_mut(id)
            .ok_or_else(|| MeshError::EntityNotFound("edge".into()))
    }

    /// Iterates all edges in index order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &EdgeData)> {
        self.edges.iter()
    }

    // --- Face operations ---

    /// Inserts an unselected face over an ordered vertex loop.
    ///
    /// Boundary edges are found or created so that neighbouring faces
    /// share them.
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex is missing, or the loop has fewer
    /// than three distinct vertices.
    pub fn add_face(
        &mut self,
        vertices: &[VertexId],
        image: Option<ImageKey>,
    ) -> Result<FaceId, MeshError> {
        for &v in vertices {
            self.vertex(v)?;
        }
        let distinct: HashSet<VertexId> = vertices.iter().copied().collect();
        if vertices.len() < 3 || distinct.len() != vertices.len() {
            return Err(MeshError::InvalidMesh(
                "face needs at least 3 distinct vertices".into(),
            ));
        }

        let n = vertices.len();
        let mut edges = Vec::with_capacity(n);
        for i in 0..n {
            edges.push(self.add_edge(vertices[i], vertices[(i + 1) % n])?);
        }

        Ok(self.faces.insert(FaceData {
            vertices: vertices.to_vec(),
            edges,
            image,
            selected: false,
        }))
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, MeshError> {
        self.faces
            .get(id)
            .ok_or_else(|| MeshError::EntityNotFound("face".into()))
    }

    /// Returns a mutable reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face_mut(&mut self, id: FaceId) -> Result<&mut FaceData, MeshError> {
        self.faces
            .get_mut(id)
            .ok_or_else(|| MeshError::EntityNotFound("face".into()))
    }

    /// Iterates all faces in index order.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &FaceData)> {
        self.faces.iter()
    }

    /// Number of faces in the mesh.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Positions of a face's boundary vertices in winding order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or one of its vertices is missing.
    pub fn face_points(&self, id: FaceId) -> Result<Vec<Point3>, MeshError> {
        self.face(id)?
            .vertices
            .iter()
            .map(|&v| self.vertex(v).map(|data| data.point))
            .collect()
    }

    // --- Selection ---

    /// Sets a vertex's selection flag without recording a pick.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not found.
    pub fn set_vertex_selected(&mut self, id: VertexId, selected: bool) -> Result<(), MeshError> {
        self.vertex_mut(id)?.selected = selected;
        Ok(())
    }

    /// Sets an edge's selection flag without recording a pick.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not found.
    pub fn set_edge_selected(&mut self, id: EdgeId, selected: bool) -> Result<(), MeshError> {
        self.edge_mut(id)?.selected = selected;
        Ok(())
    }

    /// Sets a face's selection flag without recording a pick.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not found.
    pub fn set_face_selected(&mut self, id: FaceId, selected: bool) -> Result<(), MeshError> {
        self.face_mut(id)?.selected = selected;
        Ok(())
    }

    /// Explicitly picks an element: flags it selected and makes it active.
    ///
    /// Only the picked element's own flag changes. Picking a face also
    /// makes it the mesh's active face.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is not found.
    pub fn pick(&mut self, element: impl Into<ActiveElement>) -> Result<(), MeshError> {
        let element = element.into();
        match element {
            ActiveElement::Vertex(id) => self.set_vertex_selected(id, true)?,
            ActiveElement::Edge(id) => self.set_edge_selected(id, true)?,
            ActiveElement::Face(id) => {
                self.set_face_selected(id, true)?;
                self.active_face = Some(id);
            }
        }
        self.history.push(element);
        Ok(())
    }

    /// Clears every selection flag, the pick history and the active face.
    pub fn deselect_all(&mut self) {
        for (_, v) in &mut self.vertices {
            v.selected = false;
        }
        for (_, e) in &mut self.edges {
            e.selected = false;
        }
        for (_, f) in &mut self.faces {
            f.selected = false;
        }
        self.history.clear();
        self.active_face = None;
    }

    /// The most recently picked element that still exists in the mesh.
    #[must_use]
    pub fn active_element(&self) -> Option<ActiveElement> {
        let element = self.history.active()?;
        let exists = match element {
            ActiveElement::Vertex(id) => self.vertices.contains_key(id),
            ActiveElement::Edge(id) => self.edges.contains_key(id),
            ActiveElement::Face(id) => self.faces.contains_key(id),
        };
        exists.then_some(element)
    }

    /// The mesh's active face, as tracked by the host.
    #[must_use]
    pub fn active_face(&self) -> Option<FaceId> {
        self.active_face.filter(|id| self.faces.contains_key(*id))
    }

    /// Overrides the active face without touching selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not found.
    pub fn set_active_face(&mut self, id: Option<FaceId>) -> Result<(), MeshError> {
        if let Some(id) = id {
            self.face(id)?;
        }
        self.active_face = id;
        Ok(())
    }

    /// IDs of all selected vertices, in index order.
    #[must_use]
    pub fn selected_vertices(&self) -> Vec<VertexId> {
        self.vertices
            .iter()
            .filter(|(_, v)| v.selected)
            .map(|(id, _)| id)
            .collect()
    }

    /// IDs of all selected edges, in index order.
    #[must_use]
    pub fn selected_edges(&self) -> Vec<EdgeId> {
        self.edges
            .iter()
            .filter(|(_, e)| e.selected)
            .map(|(id, _)| id)
            .collect()
    }

    /// IDs of all selected faces, in index order.
    #[must_use]
    pub fn selected_faces(&self) -> Vec<FaceId> {
        self.faces
            .iter()
            .filter(|(_, f)| f.selected)
            .map(|(id, _)| id)
            .collect()
    }
}
