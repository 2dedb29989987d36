//! Side-channel callbacks for accepted actions and completed passes.

use wf_core::{ActionKind, TileId};

use crate::{OffsetStore, PassOutcome};

/// Callbacks invoked by [`ReflowEngine`][crate::ReflowEngine].
///
/// Both methods default to no-ops so implementors only override what they
/// care about.  Calls are synchronous; a panic in a callback propagates to
/// the dispatching caller.
///
/// # Example — tap logger
///
/// ```rust
/// use wf_core::{ActionKind, TileId};
/// use wf_reflow::{ActionNotifier, OffsetStore};
///
/// struct TapLog(Vec<String>);
///
/// impl ActionNotifier for TapLog {
///     fn on_action(&mut self, kind: ActionKind, tile: TileId, _store: &OffsetStore) {
///         self.0.push(format!("{kind} {}", tile.0));
///     }
/// }
/// ```
pub trait ActionNotifier {
    /// Called once per `add_tile`/`remove_tile`, before the pass it triggers.
    /// `store` is the state the pass starts from; nothing has been written yet.
    fn on_action(&mut self, _kind: ActionKind, _tile: TileId, _store: &OffsetStore) {}

    /// Called after every pass with its outcome.
    fn on_pass(&mut self, _outcome: &PassOutcome) {}
}

impl<N: ActionNotifier + ?Sized> ActionNotifier for &mut N {
    fn on_action(&mut self, kind: ActionKind, tile: TileId, store: &OffsetStore) {
        (**self).on_action(kind, tile, store);
    }

    fn on_pass(&mut self, outcome: &PassOutcome) {
        (**self).on_pass(outcome);
    }
}

/// An [`ActionNotifier`] that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl ActionNotifier for NoopNotifier {}

/// Adapts a closure `(ActionKind, TileId)` into an [`ActionNotifier`].
pub struct FnNotifier<F>(pub F);

impl<F: FnMut(ActionKind, TileId)> ActionNotifier for FnNotifier<F> {
    fn on_action(&mut self, kind: ActionKind, tile: TileId, _store: &OffsetStore) {
        (self.0)(kind, tile);
    }
}

/// Keeps every notification in memory; handy in tests and for replaying a
/// session's taps.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    pub actions: Vec<(ActionKind, TileId)>,
    pub passes:  Vec<PassOutcome>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ActionNotifier for RecordingNotifier {
    fn on_action(&mut self, kind: ActionKind, tile: TileId, _store: &OffsetStore) {
        self.actions.push((kind, tile));
    }

    fn on_pass(&mut self, outcome: &PassOutcome) {
        self.passes.push(outcome.clone());
    }
}
