mod pick_assign;
mod select_same;
mod slots;

pub use pick_assign::{AssignImage, PickImage};
pub use select_same::{
    faces_with_image, linked_faces_with_image, resolve_anchor_face, MatchMode, SelectSameImage,
};
pub use slots::{ImageSlots, SlotKey};
