//! The host-owned tile.

use crate::TileId;

/// A labeled unit the user moves between the pool and the answer region.
///
/// The engine only ever sees `id`; the label is carried for hosts that
/// render or read back the assembled answer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub id:    TileId,
    pub label: String,
}

impl Tile {
    pub fn new(id: i32, label: impl Into<String>) -> Self {
        Self {
            id:    TileId(id),
            label: label.into(),
        }
    }
}
