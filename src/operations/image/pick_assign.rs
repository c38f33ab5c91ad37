use tracing::{debug, warn};

use crate::error::{HostError, Result, SelectionError};
use crate::host::ImageRegistry;
use crate::topology::{FaceId, ImageKey, MeshStore};

use super::{ImageSlots, SlotKey};

/// Stores the active face's image in a slot.
pub struct PickImage {
    slot: SlotKey,
}

impl PickImage {
    /// Creates a new `PickImage` operation.
    #[must_use]
    pub fn new(slot: SlotKey) -> Self {
        Self { slot }
    }

    /// Executes the pick, returning the stored image.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::AttributeUnavailable`] if the mesh has no active
    /// face or the active face has no image.
    pub fn execute(&self, store: &MeshStore, slots: &mut ImageSlots) -> Result<ImageKey> {
        let image = active_face_image(store).inspect_err(|err| {
            warn!(%err, slot = %self.slot, "pick image aborted");
        })?;

        slots.store(self.slot, image.clone());
        debug!(slot = %self.slot, %image, "stored image");
        Ok(image)
    }
}

fn active_face_image(store: &MeshStore) -> Result<ImageKey> {
    let face_id = store
        .active_face()
        .ok_or_else(|| HostError::AttributeUnavailable("active face".into()))?;
    let image = store
        .face(face_id)?
        .image
        .clone()
        .ok_or_else(|| HostError::AttributeUnavailable("active face has no image".into()))?;
    Ok(image)
}

/// Assigns the image in a slot to every selected face.
pub struct AssignImage {
    slot: SlotKey,
}

impl AssignImage {
    /// Creates a new `AssignImage` operation.
    #[must_use]
    pub fn new(slot: SlotKey) -> Self {
        Self { slot }
    }

    /// Executes the assignment, returning the number of faces changed.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::AttributeUnavailable`] if the slot is empty,
    /// [`HostError::ImageNotFound`] if the host no longer has the image and
    /// [`SelectionError::NoSelection`] if no face is selected. The mesh is
    /// unchanged on error.
    pub fn execute<R: ImageRegistry + ?Sized>(
        &self,
        store: &mut MeshStore,
        slots: &ImageSlots,
        registry: &R,
    ) -> Result<usize> {
        let Some(image) = slots.get(self.slot) else {
            warn!(slot = %self.slot, "image slot is empty");
            return Err(
                HostError::AttributeUnavailable(format!("image slot {} is empty", self.slot)).into(),
            );
        };
        if !registry.contains_image(image) {
            warn!(%image, "stored image is no longer loaded");
            return Err(HostError::ImageNotFound(image.to_string()).into());
        }
        let selected: Vec<FaceId> = store.selected_faces();
        if selected.is_empty() {
            warn!(slot = %self.slot, "no faces selected to assign image to");
            return Err(SelectionError::NoSelection("faces").into());
        }

        for &id in &selected {
            store.face_mut(id)?.image = Some(image.clone());
        }
        debug!(slot = %self.slot, %image, count = selected.len(), "assigned image");
        Ok(selected.len())
    }
}
