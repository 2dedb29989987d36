//! Fluent builder for constructing a [`Board`].

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;
use wf_core::{Layout, ReflowConfig, Tile, TileId, WfError, WfResult};
use wf_reflow::{ActionNotifier, NoopNotifier, ReflowEngine};

use crate::board::{Board, TileIndex};

/// Fluent builder for [`Board<N>`].
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                          |
/// |----------------------|----------------------------------|
/// | `.container(l)`      | `Layout::ZERO` (push it later)   |
/// | `.config(c)`         | `ReflowConfig::default()`        |
/// | `.measurements(v)`   | All unmeasured                   |
/// | `.shuffled(seed)`    | Pool keeps the given order       |
/// | `.notifier(n)`       | `NoopNotifier`                   |
pub struct BoardBuilder<N: ActionNotifier = NoopNotifier> {
    tiles:        Vec<Tile>,
    container:    Layout,
    config:       ReflowConfig,
    measurements: Option<Vec<Layout>>,
    shuffle_seed: Option<u64>,
    notifier:     N,
}

impl BoardBuilder<NoopNotifier> {
    /// Start a board over `tiles`, in pool order.
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self {
            tiles,
            container:    Layout::ZERO,
            config:       ReflowConfig::default(),
            measurements: None,
            shuffle_seed: None,
            notifier:     NoopNotifier,
        }
    }
}

impl<N: ActionNotifier> BoardBuilder<N> {
    /// Initial geometry of the answer region.
    pub fn container(mut self, container: Layout) -> Self {
        self.container = container;
        self
    }

    pub fn config(mut self, config: ReflowConfig) -> Self {
        self.config = config;
        self
    }

    /// Resting boxes for every tile, in the same order as the tile list.
    pub fn measurements(mut self, measurements: Vec<Layout>) -> Self {
        self.measurements = Some(measurements);
        self
    }

    /// Shuffle the pool deterministically with `seed` before building.
    pub fn shuffled(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Swap in a notifier for accepted actions.
    pub fn notifier<M: ActionNotifier>(self, notifier: M) -> BoardBuilder<M> {
        BoardBuilder {
            tiles:        self.tiles,
            container:    self.container,
            config:       self.config,
            measurements: self.measurements,
            shuffle_seed: self.shuffle_seed,
            notifier,
        }
    }

    /// Validate inputs and return a ready board.
    pub fn build(self) -> WfResult<Board<N>> {
        let count = self.tiles.len();

        let c = self.container;
        check_container(&c)?;

        let measured = match self.measurements {
            Some(m) => {
                if m.len() != count {
                    return Err(WfError::TileCountMismatch {
                        expected: count,
                        got:      m.len(),
                        what:     "measurements",
                    });
                }
                m
            }
            None => vec![Layout::ZERO; count],
        };

        let mut entries: Vec<(Tile, Layout)> = self.tiles.into_iter().zip(measured).collect();
        if let Some(seed) = self.shuffle_seed {
            entries.shuffle(&mut SmallRng::seed_from_u64(seed));
        }
        let (tiles, measured): (Vec<Tile>, Vec<Layout>) = entries.into_iter().unzip();

        let ids: Vec<TileId> = tiles.iter().map(|t| t.id).collect();
        let engine = ReflowEngine::from_tiles(&ids, self.container, self.config, self.notifier)?;
        let index: TileIndex = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        debug!("board built with {count} tiles in {c}");

        Ok(Board {
            tiles,
            index,
            measured,
            engine,
        })
    }
}

/// Reject container geometry that placement arithmetic cannot use.
pub(crate) fn check_container(c: &Layout) -> WfResult<()> {
    if c.is_finite() {
        Ok(())
    } else {
        Err(WfError::Config(format!("container geometry must be finite, got {c}")))
    }
}
