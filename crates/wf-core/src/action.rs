//! Kinds of tile actions, shared by the engine and its notifier.

/// What a dispatch call asked for.
///
/// The numeric codes (`Add = 1`, `Remove = 2`) are the values observers
/// receive in the notification stream; `0` is reserved for "no action" and
/// is never emitted.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ActionKind {
    /// Move a tile from the pool into the answer region.
    Add    = 1,
    /// Take a tile out of the answer region.
    Remove = 2,
}

impl ActionKind {
    /// Notification code.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Add    => "add",
            ActionKind::Remove => "remove",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
