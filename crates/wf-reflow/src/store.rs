//! The `OffsetStore` — N fixed slots, written only by the engine.

use wf_core::{Layout, SlotIndex, TileId};

use crate::OffsetSlot;

/// Holds every slot in index order.
///
/// The vector is sized once at construction and never grows or shrinks.
/// After every completed pass the occupied slots form a prefix: no empty slot
/// precedes an occupied one (see [`is_compact`](Self::is_compact)).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetStore {
    pub(crate) slots: Vec<OffsetSlot>,
}

impl OffsetStore {
    /// Create a store with `slot_count` empty slots.
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![OffsetSlot::EMPTY; slot_count],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Read-only view of all slots in index order.
    #[inline]
    pub fn as_slice(&self) -> &[OffsetSlot] {
        &self.slots
    }

    #[inline]
    pub fn get(&self, slot: SlotIndex) -> Option<&OffsetSlot> {
        self.slots.get(slot.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &OffsetSlot> {
        self.slots.iter()
    }

    /// Slot currently holding `tile` (the first one, should ids repeat).
    pub fn slot_of(&self, tile: TileId) -> Option<SlotIndex> {
        if !tile.is_valid() {
            return None;
        }
        self.slots
            .iter()
            .position(|s| s.occupant == tile)
            .map(|i| SlotIndex(i as u32))
    }

    /// Target box for `tile`, if it is placed.
    pub fn target_of(&self, tile: TileId) -> Option<Layout> {
        self.slot_of(tile).map(|s| self.slots[s.index()].layout())
    }

    /// Lowest-index empty slot.
    pub fn first_empty(&self) -> Option<SlotIndex> {
        self.slots
            .iter()
            .position(OffsetSlot::is_empty)
            .map(|i| SlotIndex(i as u32))
    }

    /// Number of occupied slots.
    pub fn occupied_len(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    /// Placed tiles in flow order.
    pub fn occupants(&self) -> Vec<TileId> {
        self.slots
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.occupant)
            .collect()
    }

    /// `true` when every occupied slot comes before every empty one.
    pub fn is_compact(&self) -> bool {
        let occupied = self.slots.iter().take_while(|s| !s.is_empty()).count();
        self.slots[occupied..].iter().all(OffsetSlot::is_empty)
    }

    /// Predecessor of slot `i`, `None` for slot 0.
    #[inline]
    pub(crate) fn prev(&self, i: usize) -> Option<&OffsetSlot> {
        i.checked_sub(1).map(|p| &self.slots[p])
    }
}
