//! `wf-board` — the host side of a word-rearrange exercise.
//!
//! A [`Board`] owns the tile set, each tile's measured resting box, and a
//! [`ReflowEngine`][wf_reflow::ReflowEngine].  It turns taps into add/remove
//! dispatches and answers the renderer's one question: how far should each
//! tile be translated right now?
//!
//! # Quick-start
//!
//! ```rust
//! use wf_board::BoardBuilder;
//! use wf_core::{Layout, Tile, TileId};
//!
//! let tiles = vec![Tile::new(1, "hello"), Tile::new(2, "world")];
//! let mut board = BoardBuilder::new(tiles)
//!     .container(Layout::new(0.0, 200.0, 300.0, 80.0))
//!     .build()?;
//!
//! board.measure(TileId(2), Layout::new(70.0, 0.0, 60.0, 30.0))?;
//! board.tap(TileId(2))?;
//! assert_eq!(board.answer_text(), "world");
//! # Ok::<(), wf_core::WfError>(())
//! ```
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash for the tile-id lookup map.                       |
//! | `serde`   | Serde derives on core and store types.                   |

pub mod board;
pub mod builder;

#[cfg(test)]
mod tests;

pub use board::Board;
pub use builder::BoardBuilder;
