use std::collections::BTreeMap;
use std::fmt;

use crate::topology::ImageKey;

/// One of the ten numbered image slots, keyed by the digits `0`-`9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey(u8);

impl SlotKey {
    /// Parses a slot from its digit key.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        key.to_digit(10).and_then(|d| u8::try_from(d).ok()).map(Self)
    }

    /// The digit key of this slot.
    #[must_use]
    pub fn key(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session-scoped store of picked images.
///
/// Filled by [`PickImage`](super::PickImage) and read by
/// [`AssignImage`](super::AssignImage). Starts empty with every editing
/// session and is never written to disk.
#[derive(Debug, Clone, Default)]
pub struct ImageSlots {
    slots: BTreeMap<SlotKey, ImageKey>,
}

impl ImageSlots {
    /// Creates an empty slot table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `image` in `slot`, returning what was there before.
    pub fn store(&mut self, slot: SlotKey, image: ImageKey) -> Option<ImageKey> {
        self.slots.insert(slot, image)
    }

    /// The image stored in `slot`.
    #[must_use]
    pub fn get(&self, slot: SlotKey) -> Option<&ImageKey> {
        self.slots.get(&slot)
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Number of filled slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slot is filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_slots() {
        for c in '0'..='9' {
            assert_eq!(SlotKey::from_key(c).unwrap().key(), c);
        }
        assert!(SlotKey::from_key('a').is_none());
        assert!(SlotKey::from_key(' ').is_none());
    }

    #[test]
    fn store_overwrites_slot() {
        let mut slots = ImageSlots::new();
        let one = SlotKey::from_key('1').unwrap();
        assert!(slots.store(one, ImageKey::new("brick")).is_none());
        let old = slots.store(one, ImageKey::new("grass"));
        assert_eq!(old, Some(ImageKey::new("brick")));
        assert_eq!(slots.get(one), Some(&ImageKey::new("grass")));
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn clear_empties_everything() {
        let mut slots = ImageSlots::new();
        slots.store(SlotKey::from_key('0').unwrap(), ImageKey::new("a"));
        slots.store(SlotKey::from_key('9').unwrap(), ImageKey::new("b"));
        slots.clear();
        assert!(slots.is_empty());
    }
}
