use super::edge::EdgeId;
use super::face::FaceId;
use super::vertex::VertexId;

/// A mesh element picked explicitly by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActiveElement {
    Vertex(VertexId),
    Edge(EdgeId),
    Face(FaceId),
}

impl From<VertexId> for ActiveElement {
    fn from(id: VertexId) -> Self {
        Self::Vertex(id)
    }
}

impl From<EdgeId> for ActiveElement {
    fn from(id: EdgeId) -> Self {
        Self::Edge(id)
    }
}

impl From<FaceId> for ActiveElement {
    fn from(id: FaceId) -> Self {
        Self::Face(id)
    }
}

/// Recency-ordered log of explicitly picked elements.
///
/// Only picks are recorded. Selection flags changed in bulk never touch
/// the history, so a mesh whose selection came from "select all" has no
/// active element.
#[derive(Debug, Clone, Default)]
pub struct SelectHistory {
    entries: Vec<ActiveElement>,
}

impl SelectHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `element` as the most recent pick.
    ///
    /// Picking an element already in the log moves it to the end.
    pub fn push(&mut self, element: ActiveElement) {
        self.entries.retain(|e| *e != element);
        self.entries.push(element);
    }

    /// The most recently picked element, regardless of its kind.
    #[must_use]
    pub fn active(&self) -> Option<ActiveElement> {
        self.entries.last().copied()
    }

    /// Forgets every pick.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
