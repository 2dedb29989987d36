//! The single pending request.

use wf_core::{ActionKind, Layout, TileId};

/// What the next pass should do.
///
/// There is exactly one of these per engine.  Dispatch overwrites it
/// (last write wins) and a completed pass resets it to `None`.  The layout is
/// the tapped tile's measured box: its width places the tile, its height is
/// the row height when a row wraps.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Action {
    #[default]
    None,
    Add {
        tile:   TileId,
        layout: Layout,
    },
    Remove {
        tile:   TileId,
        layout: Layout,
    },
}

impl Action {
    #[inline]
    pub fn kind(&self) -> Option<ActionKind> {
        match self {
            Action::None           => None,
            Action::Add { .. }     => Some(ActionKind::Add),
            Action::Remove { .. }  => Some(ActionKind::Remove),
        }
    }

    #[inline]
    pub fn tile(&self) -> Option<TileId> {
        match *self {
            Action::None                                          => None,
            Action::Add { tile, .. } | Action::Remove { tile, .. } => Some(tile),
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        !matches!(self, Action::None)
    }

    pub(crate) fn new(kind: ActionKind, tile: TileId, layout: Layout) -> Self {
        match kind {
            ActionKind::Add    => Action::Add { tile, layout },
            ActionKind::Remove => Action::Remove { tile, layout },
        }
    }
}
