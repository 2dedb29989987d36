//! `wf-core` — foundational types for the word-flow rearrange engine.
//!
//! Every other `wf-*` crate depends on this one.  It has no `wf-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TileId` (sentinel `-1` = empty), `SlotIndex`         |
//! | [`geometry`]    | `Layout` box, `Translation` delta                     |
//! | [`tile`]        | `Tile` — labeled unit owned by the host               |
//! | [`action`]      | `ActionKind` enum with its notification codes         |
//! | [`config`]      | `ReflowConfig`, `ActionPolicy`                        |
//! | [`error`]       | `WfError`, `WfResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod action;
pub mod config;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod tile;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::ActionKind;
pub use config::{ActionPolicy, ReflowConfig};
pub use error::{WfError, WfResult};
pub use geometry::{Layout, Translation};
pub use ids::{SlotIndex, TileId};
pub use tile::Tile;
