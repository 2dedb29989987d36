//! The reflow engine: dispatch entry points plus the add/remove passes.

use std::collections::HashSet;

use tracing::{debug, trace, warn};
use wf_core::{ActionKind, ActionPolicy, Layout, ReflowConfig, SlotIndex, TileId, WfError, WfResult};

use crate::{place_after, Action, ActionNotifier, NoopNotifier, OffsetSlot, OffsetStore};

/// Which input changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// The pending action was written by `add_tile`/`remove_tile`.
    Action,
    /// The container geometry changed.
    Container,
}

/// Why an action was dropped under [`ActionPolicy::Strict`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DiscardReason {
    /// Remove of a tile that holds no slot.
    NotPlaced,
    /// Add of a tile that already holds a slot.
    AlreadyPlaced,
    /// Add with every slot occupied.
    NoFreeSlot,
}

/// Result of one pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PassOutcome {
    /// Nothing pending and nothing to re-flow; the store is untouched.
    #[default]
    Idle,
    /// `tile` was written into `slot`.
    Placed { tile: TileId, slot: SlotIndex },
    /// `tile` left `slot`; `shifted` later occupants moved one slot earlier.
    Removed { tile: TileId, slot: SlotIndex, shifted: usize },
    /// A container change re-flowed `slots` occupied slots.
    Relaid { slots: usize },
    /// The action could not apply and was dropped (strict policy).
    Discarded { kind: ActionKind, tile: TileId, reason: DiscardReason },
    /// The action could not apply and is still pending (compatible policy).
    Stalled { kind: ActionKind, tile: TileId },
}

/// Owns the offset store and the single pending action.
///
/// # Type parameter
///
/// `N` receives a callback for every accepted dispatch and every pass.  Use
/// [`NoopNotifier`] (the default) when nobody is listening.
///
/// # Passes
///
/// `add_tile`, `remove_tile` and `set_container` each run exactly one
/// [`recompute`](Self::recompute) before returning.  A pass reads only the
/// pending action and the container; the slots it writes never feed back
/// into a trigger.
pub struct ReflowEngine<N: ActionNotifier = NoopNotifier> {
    store:        OffsetStore,
    pending:      Action,
    container:    Layout,
    /// Container the occupied slots were last re-flowed against.
    laid_out:     Layout,
    config:       ReflowConfig,
    notifier:     N,
    last_outcome: PassOutcome,
}

impl ReflowEngine<NoopNotifier> {
    /// An engine with `slot_count` empty slots, default config, no notifier.
    pub fn with_slots(slot_count: usize, container: Layout) -> Self {
        Self::new(slot_count, container, ReflowConfig::default(), NoopNotifier)
    }
}

impl<N: ActionNotifier> ReflowEngine<N> {
    /// Create an engine with `slot_count` empty slots.
    pub fn new(slot_count: usize, container: Layout, config: ReflowConfig, notifier: N) -> Self {
        Self {
            store: OffsetStore::new(slot_count),
            pending: Action::None,
            container,
            laid_out: container,
            config,
            notifier,
            last_outcome: PassOutcome::Idle,
        }
    }

    /// Create an engine sized for `tiles`, rejecting repeated or sentinel ids.
    pub fn from_tiles(
        tiles:     &[TileId],
        container: Layout,
        config:    ReflowConfig,
        notifier:  N,
    ) -> WfResult<Self> {
        let mut seen = HashSet::with_capacity(tiles.len());
        for &tile in tiles {
            if !tile.is_valid() {
                return Err(WfError::Config(format!("{tile} is reserved for empty slots")));
            }
            if !seen.insert(tile) {
                return Err(WfError::DuplicateTile(tile));
            }
        }
        Ok(Self::new(tiles.len(), container, config, notifier))
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn store(&self) -> &OffsetStore {
        &self.store
    }

    #[inline]
    pub fn pending(&self) -> &Action {
        &self.pending
    }

    #[inline]
    pub fn container(&self) -> Layout {
        self.container
    }

    #[inline]
    pub fn config(&self) -> &ReflowConfig {
        &self.config
    }

    /// Outcome of the most recent pass (`Idle` before the first one).
    #[inline]
    pub fn last_outcome(&self) -> &PassOutcome {
        &self.last_outcome
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn into_notifier(self) -> N {
        self.notifier
    }

    // ── Inputs ────────────────────────────────────────────────────────────

    /// Request that `tile`, measured at `layout`, join the flow.
    pub fn add_tile(&mut self, layout: Layout, tile: TileId) {
        self.dispatch(ActionKind::Add, tile, layout);
    }

    /// Request that `tile` leave the flow.  `layout.height` is the row height
    /// used when a shifted tile has to wrap.
    pub fn remove_tile(&mut self, layout: Layout, tile: TileId) {
        self.dispatch(ActionKind::Remove, tile, layout);
    }

    /// Push new container geometry.  Runs a pass only if the value changed.
    pub fn set_container(&mut self, container: Layout) -> PassOutcome {
        if container == self.container {
            return PassOutcome::Idle;
        }
        debug!("container changed: {} -> {}", self.container, container);
        self.container = container;
        self.recompute(Trigger::Container)
    }

    fn dispatch(&mut self, kind: ActionKind, tile: TileId, layout: Layout) {
        if let Some(dropped) = self.pending.tile() {
            debug!("pending action for {dropped} overwritten by {kind} {tile}");
        }
        self.pending = Action::new(kind, tile, layout);
        self.notifier.on_action(kind, tile, &self.store);
        self.recompute(Trigger::Action);
    }

    // ── Passes ────────────────────────────────────────────────────────────

    /// Run one pass for `trigger` and return what it did.
    ///
    /// With nothing pending and the container unchanged since the last
    /// relayout this is a no-op that leaves the store bit-for-bit unchanged.
    pub fn recompute(&mut self, trigger: Trigger) -> PassOutcome {
        debug!(?trigger, pending = ?self.pending, "reflow pass");

        let mut outcome = match self.pending {
            Action::None => PassOutcome::Idle,
            Action::Add { tile, layout } => self.apply_add(tile, layout),
            Action::Remove { tile, layout } => self.apply_remove(tile, layout),
        };

        if trigger == Trigger::Container
            && self.config.reflow_on_resize
            && self.container != self.laid_out
        {
            let slots = self.relayout();
            self.laid_out = self.container;
            if outcome == PassOutcome::Idle {
                outcome = PassOutcome::Relaid { slots };
            }
        }

        debug!(?outcome, occupied = self.store.occupied_len(), "reflow pass done");
        self.notifier.on_pass(&outcome);
        self.last_outcome = outcome.clone();
        outcome
    }

    fn apply_add(&mut self, tile: TileId, layout: Layout) -> PassOutcome {
        let strict = self.config.policy == ActionPolicy::Strict;

        if strict && self.store.slot_of(tile).is_some() {
            return self.discard(ActionKind::Add, tile, DiscardReason::AlreadyPlaced);
        }

        let Some(slot) = self.store.first_empty() else {
            return if strict {
                self.discard(ActionKind::Add, tile, DiscardReason::NoFreeSlot)
            } else {
                self.stall(ActionKind::Add, tile)
            };
        };

        let i = slot.index();
        let (x, y) = place_after(self.store.prev(i), layout.width, layout.height, &self.container);
        self.write(i, OffsetSlot::occupied(tile, x, y, layout.width, layout.height));
        self.pending = Action::None;

        PassOutcome::Placed { tile, slot }
    }

    /// Empty the target's slot, then walk forward pulling each next occupant
    /// into the hole until the next slot is already empty or the end of the
    /// store is reached.
    fn apply_remove(&mut self, tile: TileId, layout: Layout) -> PassOutcome {
        let Some(slot) = self.store.slot_of(tile) else {
            return if self.config.policy == ActionPolicy::Strict {
                self.discard(ActionKind::Remove, tile, DiscardReason::NotPlaced)
            } else {
                self.stall(ActionKind::Remove, tile)
            };
        };

        let mut hole = slot.index();
        self.write(hole, OffsetSlot::EMPTY);

        let mut shifted = 0;
        while let Some(next) = self.store.slots.get(hole + 1).copied() {
            if next.is_empty() {
                break;
            }
            let (x, y) = place_after(self.store.prev(hole), next.width, layout.height, &self.container);
            self.write(hole, OffsetSlot::occupied(next.occupant, x, y, next.width, next.height));
            self.write(hole + 1, OffsetSlot::EMPTY);
            shifted += 1;
            hole += 1;
        }
        self.pending = Action::None;

        PassOutcome::Removed { tile, slot, shifted }
    }

    /// Re-place every occupied slot in index order against the current
    /// container.  Returns the number of slots visited.
    fn relayout(&mut self) -> usize {
        let mut count = 0;
        for i in 0..self.store.len() {
            let current = self.store.slots[i];
            if current.is_empty() {
                break;
            }
            let (x, y) = place_after(self.store.prev(i), current.width, current.height, &self.container);
            self.write(i, OffsetSlot { x, y, ..current });
            count += 1;
        }
        count
    }

    fn discard(&mut self, kind: ActionKind, tile: TileId, reason: DiscardReason) -> PassOutcome {
        warn!("discarding {kind} of {tile}: {reason:?}");
        self.pending = Action::None;
        PassOutcome::Discarded { kind, tile, reason }
    }

    fn stall(&mut self, kind: ActionKind, tile: TileId) -> PassOutcome {
        warn!("{kind} of {tile} cannot apply; action stays pending");
        PassOutcome::Stalled { kind, tile }
    }

    #[inline]
    fn write(&mut self, i: usize, slot: OffsetSlot) {
        trace!(slot = i, tile = %slot.occupant, x = slot.x, y = slot.y, width = slot.width, "slot write");
        self.store.slots[i] = slot;
    }
}
