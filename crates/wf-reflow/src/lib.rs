//! `wf-reflow` — the offset store and the reflow engine that keeps it packed.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`slot`]        | `OffsetSlot` — one fixed position and its committed box     |
//! | [`store`]       | `OffsetStore` — `Vec<OffsetSlot>` with flow-order queries   |
//! | [`action`]      | `Action` — the single pending add/remove request            |
//! | [`placement`]   | The row-wrap rule shared by every pass                      |
//! | [`notifier`]    | `ActionNotifier` trait + no-op, closure, and recording impls |
//! | [`engine`]      | `ReflowEngine<N>`, `Trigger`, `PassOutcome`                 |
//!
//! # Reflow model
//!
//! The engine reacts to exactly two inputs: the pending [`Action`] and the
//! container [`Layout`][wf_core::Layout].  Every change to either runs one
//! synchronous pass via [`ReflowEngine::recompute`]:
//!
//! 1. `Add`: the tile goes into the first empty slot, placed after its
//!    predecessor (same row, or wrapped to a new row).
//! 2. `Remove`: the tile's slot is emptied and every following occupant is
//!    pulled one slot earlier, re-placed against its new predecessor.
//! 3. The pending action drains back to `Action::None`.
//!
//! Slot writes are never inputs, so a pass cannot re-trigger itself.  All
//! mutation goes through `&mut ReflowEngine`, so readers only ever see the
//! store between passes.

pub mod action;
pub mod engine;
pub mod notifier;
pub mod placement;
pub mod slot;
pub mod store;


pub use action::Action;
pub use engine::{DiscardReason, PassOutcome, ReflowEngine, Trigger};
pub use notifier::{ActionNotifier, FnNotifier, NoopNotifier, RecordingNotifier};
pub use placement::{place_after, wraps};
pub use slot::OffsetSlot;
pub use store::OffsetStore;
