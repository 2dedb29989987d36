//! The `Board` — tiles, their resting boxes, and the engine that places them.

use tracing::debug;
use wf_core::{ActionKind, Layout, Tile, TileId, Translation, WfError, WfResult};
use wf_reflow::{ActionNotifier, NoopNotifier, PassOutcome, ReflowEngine};

use crate::builder::check_container;

#[cfg(feature = "fx-hash")]
pub(crate) type TileIndex = rustc_hash::FxHashMap<TileId, usize>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type TileIndex = std::collections::HashMap<TileId, usize>;

/// A word-rearrange board.
///
/// Tiles keep a fixed resting place in the pool (their measured layout).  A
/// selected tile is animated from that resting place to its slot in the
/// answer region; an unselected one is not translated at all.
///
/// Create via [`BoardBuilder`][crate::BoardBuilder].
pub struct Board<N: ActionNotifier = NoopNotifier> {
    /// Tiles in pool order.
    pub(crate) tiles: Vec<Tile>,

    /// Tile id → position in `tiles`.
    pub(crate) index: TileIndex,

    /// Resting box per tile, parallel to `tiles`.
    pub(crate) measured: Vec<Layout>,

    pub(crate) engine: ReflowEngine<N>,
}

impl<N: ActionNotifier> Board<N> {
    // ── Lookup ────────────────────────────────────────────────────────────

    /// Tiles in pool order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> WfResult<&Tile> {
        self.position(id).map(|i| &self.tiles[i])
    }

    pub fn engine(&self) -> &ReflowEngine<N> {
        &self.engine
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        self.engine.notifier_mut()
    }

    fn position(&self, id: TileId) -> WfResult<usize> {
        self.index.get(&id).copied().ok_or(WfError::UnknownTile(id))
    }

    // ── Host inputs ───────────────────────────────────────────────────────

    /// Record where `id` rests in the pool and how big it is.
    pub fn measure(&mut self, id: TileId, layout: Layout) -> WfResult<()> {
        let i = self.position(id)?;
        self.measured[i] = layout;
        Ok(())
    }

    pub fn measured(&self, id: TileId) -> WfResult<Layout> {
        self.position(id).map(|i| self.measured[i])
    }

    /// Push new answer-region geometry.  Non-finite geometry is rejected and
    /// leaves the engine's container as it was.
    pub fn set_container(&mut self, container: Layout) -> WfResult<PassOutcome> {
        check_container(&container)?;
        Ok(self.engine.set_container(container))
    }

    /// Toggle `id` between pool and answer.
    ///
    /// Returns which action was dispatched.  A tile that has not reported a
    /// non-zero width yet cannot be tapped.
    pub fn tap(&mut self, id: TileId) -> WfResult<ActionKind> {
        let layout = self.measured(id)?;
        if !layout.is_measured() {
            return Err(WfError::NotMeasured(id));
        }

        let kind = if self.is_selected(id)? {
            self.engine.remove_tile(layout, id);
            ActionKind::Remove
        } else {
            self.engine.add_tile(layout, id);
            ActionKind::Add
        };
        debug!("tap {id}: {kind} -> {:?}", self.engine.last_outcome());
        Ok(kind)
    }

    // ── Renderer queries ──────────────────────────────────────────────────

    /// `true` while `id` holds a slot in the answer region.
    pub fn is_selected(&self, id: TileId) -> WfResult<bool> {
        self.position(id)?;
        Ok(self.engine.store().slot_of(id).is_some())
    }

    /// Offset from the tile's resting box to its slot; zero when unselected.
    pub fn translation(&self, id: TileId) -> WfResult<Translation> {
        let rest = self.measured(id)?;
        Ok(self
            .engine
            .store()
            .target_of(id)
            .map_or(Translation::ZERO, |target| rest.translation_to(&target)))
    }

    /// Translation for every tile, in pool order.
    pub fn translations(&self) -> Vec<(TileId, Translation)> {
        let store = self.engine.store();
        self.tiles
            .iter()
            .zip(&self.measured)
            .map(|(tile, rest)| {
                let delta = store
                    .target_of(tile.id)
                    .map_or(Translation::ZERO, |target| rest.translation_to(&target));
                (tile.id, delta)
            })
            .collect()
    }

    /// Selected tiles in answer order.
    pub fn answer(&self) -> Vec<&Tile> {
        self.engine
            .store()
            .occupants()
            .into_iter()
            .filter_map(|id| self.index.get(&id).map(|&i| &self.tiles[i]))
            .collect()
    }

    /// Labels of the selected tiles joined by single spaces.
    pub fn answer_text(&self) -> String {
        self.answer()
            .iter()
            .map(|t| t.label.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Unselected tiles in pool order.
    pub fn pool(&self) -> Vec<&Tile> {
        let store = self.engine.store();
        self.tiles
            .iter()
            .filter(|t| store.slot_of(t.id).is_none())
            .collect()
    }
}
