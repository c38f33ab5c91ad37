use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the mesh store.
    pub struct EdgeId;
}

/// Data associated with a mesh edge.
///
/// An edge connects two distinct vertices. Which faces use it is not
/// stored here; see [`MeshAdjacency`](super::MeshAdjacency).
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// The two endpoint vertices.
    pub vertices: [VertexId; 2],
    /// Whether the edge is flagged as selected.
    pub selected: bool,
}

impl EdgeData {
    /// Creates a new, unselected edge between two vertices.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        Self {
            vertices: [a, b],
            selected: false,
        }
    }
}
