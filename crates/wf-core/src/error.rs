//! Shared error type.
//!
//! The reflow engine never fails; it degrades (see `wf-reflow`).  These
//! errors come from constructors that validate the tile set and from host
//! operations in `wf-board`.

use thiserror::Error;

use crate::TileId;

#[derive(Debug, Error)]
pub enum WfError {
    #[error("tile {0} appears more than once in the tile set")]
    DuplicateTile(TileId),

    #[error("tile {0} is not part of this board")]
    UnknownTile(TileId),

    #[error("tile {0} has not been measured yet")]
    NotMeasured(TileId),

    #[error("{what} length {got} does not match tile count {expected}")]
    TileCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `wf-*` crates.
pub type WfResult<T> = Result<T, WfError>;
