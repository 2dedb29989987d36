//! One position in the offset store.

use wf_core::{Layout, TileId};

/// A fixed position holding at most one tile and the box it should animate
/// to.
///
/// An empty slot has `occupant == TileId::EMPTY` and all-zero geometry.
/// Clearing always resets the geometry too, so an emptied slot compares equal
/// to a never-used one.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetSlot {
    /// Tile placed here, or `TileId::EMPTY`.
    pub occupant: TileId,

    pub x:      f32,
    pub y:      f32,
    pub width:  f32,
    pub height: f32,
}

impl OffsetSlot {
    pub const EMPTY: OffsetSlot = OffsetSlot {
        occupant: TileId::EMPTY,
        x:        0.0,
        y:        0.0,
        width:    0.0,
        height:   0.0,
    };

    /// A slot holding `tile` at `(x, y)` with the given size.
    #[inline]
    pub fn occupied(tile: TileId, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { occupant: tile, x, y, width, height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.occupant.is_valid()
    }

    /// The committed target box.
    #[inline]
    pub fn layout(&self) -> Layout {
        Layout::new(self.x, self.y, self.width, self.height)
    }
}
