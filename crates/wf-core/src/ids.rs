//! Strongly typed, zero-cost identifier wrappers.
//!
//! `TileId` wraps the host's integer tile id and reserves `-1` as the "slot is
//! empty" sentinel.  `SlotIndex` is a position in the fixed offset array; it
//! never changes for the lifetime of an engine.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer, optionally with a
/// named sentinel value.
macro_rules! typed_id {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident($inner:ty);
        $(sentinel $sentinel:ident = $value:expr;)?
    ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        $(
        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const $sentinel: $name = $name($value);

            /// `false` only for the sentinel.
            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::$sentinel
            }
        }

        impl Default for $name {
            /// Returns the sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::$sentinel
            }
        }
        )?

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Host-assigned tile identifier.  `TileId::EMPTY` (`-1`) marks a free slot.
    pub struct TileId(i32);
    sentinel EMPTY = -1;
}

typed_id! {
    /// Position of a slot in the offset store.
    pub struct SlotIndex(u32);
}

impl SlotIndex {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
