//! sentence — scripted walkthrough of a word-rearrange board.
//!
//! Builds a shuffled pool from a fixed sentence, taps random tiles for a
//! while (checking the packed-flow invariant after every pass), then clears
//! the answer and assembles the sentence in order.  Pass `RUST_LOG=debug`
//! (or `trace`) to watch every pass and slot write.
//!
//! Usage: `sentence [config.json]`

mod measure;

use std::path::Path;

use anyhow::{bail, Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wf_board::{Board, BoardBuilder};
use wf_core::{ActionKind, Layout, ReflowConfig, Tile, TileId};
use wf_reflow::{ActionNotifier, OffsetStore};

use measure::{pool_height, pool_layouts};

// ── Constants ─────────────────────────────────────────────────────────────────

const SENTENCE:   &str = "the quick brown fox jumps over the lazy dog near the riverbank";
const POOL_WIDTH: f32  = 320.0;

// ── Config ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    /// Answer region, relative to the pool's top-left.
    container: Layout,
    reflow:    ReflowConfig,
    seed:      u64,
    /// Random taps before the sentence is assembled.
    taps:      usize,
    shuffle:   bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            container: Layout::new(15.0, 0.0, POOL_WIDTH, 0.0),
            reflow:    ReflowConfig::default(),
            seed:      42,
            taps:      40,
            shuffle:   true,
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── Notifier ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct TapCounter {
    adds:    usize,
    removes: usize,
}

impl ActionNotifier for TapCounter {
    fn on_action(&mut self, kind: ActionKind, tile: TileId, store: &OffsetStore) {
        match kind {
            ActionKind::Add    => self.adds += 1,
            ActionKind::Remove => self.removes += 1,
        }
        info!(action = kind.code(), tile = tile.0, placed = store.occupied_len(), "callback");
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check_flow(board: &Board<TapCounter>) -> Result<()> {
    let store = board.engine().store();
    if !store.is_compact() {
        bail!("offset store has a gap: {:?}", store.occupants());
    }
    if board.engine().pending().is_pending() {
        bail!("action still pending after pass: {:?}", board.engine().pending());
    }
    Ok(())
}

fn print_layout(board: &Board<TapCounter>) {
    println!("{:<6} {:<12} {:>8} {:>8} {:>8} {:>10} {:>10}", "Slot", "Word", "x", "y", "width", "dx", "dy");
    println!("{}", "-".repeat(68));
    for (i, slot) in board.engine().store().iter().enumerate() {
        if slot.is_empty() {
            break;
        }
        let label = board.tile(slot.occupant).map(|t| t.label.as_str()).unwrap_or("?");
        let delta = board.translation(slot.occupant).unwrap_or_default();
        println!(
            "{:<6} {:<12} {:>8.1} {:>8.1} {:>8.1} {:>10.1} {:>10.1}",
            i, label, slot.x, slot.y, slot.width, delta.dx, delta.dy
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref().map(Path::new))?;

    println!("=== sentence — word-flow rearrange demo ===");
    println!("Seed: {}  |  Random taps: {}  |  Policy: {:?}", config.seed, config.taps, config.reflow.policy);
    println!();

    // 1. Tiles and their resting boxes in the pool.
    let tiles: Vec<Tile> = SENTENCE
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| Tile::new(i as i32, word))
        .collect();
    let order: Vec<TileId> = tiles.iter().map(|t| t.id).collect();

    let mut builder = BoardBuilder::new(tiles).config(config.reflow.clone());
    if config.shuffle {
        builder = builder.shuffled(config.seed);
    }
    let mut board = builder.notifier(TapCounter::default()).build()?;

    let rest = pool_layouts(board.tiles(), POOL_WIDTH);
    let ids: Vec<TileId> = board.tiles().iter().map(|t| t.id).collect();
    for (id, layout) in ids.iter().zip(&rest) {
        board.measure(*id, *layout)?;
    }

    // 2. The answer region sits below the pool.
    let below = pool_height(&rest) + 20.0;
    let container = Layout { y: config.container.y + below, ..config.container };
    board.set_container(container)?;

    let pool: Vec<&str> = board.tiles().iter().map(|t| t.label.as_str()).collect();
    println!("Pool:      {}", pool.join(" "));
    println!("Container: {container}");
    println!();

    // 3. Random taps.
    let mut rng = SmallRng::seed_from_u64(config.seed);
    for _ in 0..config.taps {
        let id = ids[rng.gen_range(0..ids.len())];
        board.tap(id)?;
        check_flow(&board)?;
    }
    println!("After {} random taps: \"{}\"", config.taps, board.answer_text());

    // 4. Clear the answer back-to-front, then assemble in sentence order.
    let placed: Vec<TileId> = board.answer().iter().map(|t| t.id).collect();
    for id in placed.into_iter().rev() {
        board.tap(id)?;
        check_flow(&board)?;
    }
    for id in order {
        board.tap(id)?;
        check_flow(&board)?;
    }

    println!("Assembled:           \"{}\"", board.answer_text());
    println!();
    print_layout(&board);

    let counter = board.notifier_mut();
    println!();
    println!("Accepted actions: {} add, {} remove", counter.adds, counter.removes);

    if board.answer_text() != SENTENCE {
        bail!("assembled answer does not match the sentence");
    }
    Ok(())
}
