//! Reflow configuration.
//!
//! The defaults give well-behaved engines: unusable actions are dropped and
//! the pending record always drains.  `ActionPolicy::Compatible` keeps the
//! unvalidated behavior, stalls included, for hosts that depend on it.

/// How the engine treats an action that cannot be applied.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionPolicy {
    /// Validate before applying.  A remove of an absent tile, an add with no
    /// free slot, or an add of an already placed tile is discarded and the
    /// pending record resets to `None`.
    #[default]
    Strict,
    /// No validation.  A remove of an absent tile or an add with no free
    /// slot leaves the record pending (the pass stalls) until a later
    /// dispatch overwrites it.  An add of an already placed tile places it a
    /// second time.
    Compatible,
}

/// Engine configuration.
///
/// Typically built in code; the demo loads it from JSON with the `serde`
/// feature enabled.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReflowConfig {
    /// See [`ActionPolicy`].  Default: `Strict`.
    pub policy: ActionPolicy,

    /// Re-flow every occupied slot when the container changes.  Default:
    /// `false`, so a resize alone only takes effect at the next action.
    pub reflow_on_resize: bool,
}

impl ReflowConfig {
    /// Strict policy, no relayout on resize.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Unvalidated policy.
    pub fn compatible() -> Self {
        Self {
            policy: ActionPolicy::Compatible,
            ..Self::default()
        }
    }

    pub fn with_reflow_on_resize(mut self, on: bool) -> Self {
        self.reflow_on_resize = on;
        self
    }
}
