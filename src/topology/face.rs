use std::fmt;

use super::edge::EdgeId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the mesh store.
    pub struct FaceId;
}

/// Identifier of the texture image assigned to a face.
///
/// Compared by value. A face without an image carries `None`, and two
/// image-less faces are considered to share the same image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageKey(String);

impl ImageKey {
    /// Creates an image key from a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The image name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Data associated with a mesh face.
///
/// A face is a polygon over an ordered loop of vertices. `edges[i]` joins
/// `vertices[i]` and `vertices[(i + 1) % n]`.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// Boundary vertices in winding order.
    pub vertices: Vec<VertexId>,
    /// Boundary edges, parallel to `vertices`.
    pub edges: Vec<EdgeId>,
    /// The texture image assigned to this face, if any.
    pub image: Option<ImageKey>,
    /// Whether the face is flagged as selected.
    pub selected: bool,
}

impl FaceData {
    /// Returns `true` if this face's image matches `key`.
    ///
    /// Two missing images match each other.
    #[must_use]
    pub fn has_image(&self, key: Option<&ImageKey>) -> bool {
        self.image.as_ref() == key
    }
}
