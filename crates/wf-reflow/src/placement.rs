//! The row-wrap rule.
//!
//! The overflow test compares against `container.width`, not the container's
//! right edge, so a container offset by `x` effectively loses `x` pixels of
//! usable width.  Existing hosts lay out against this exact rule.

use wf_core::Layout;

use crate::OffsetSlot;

/// `true` if a tile of `width` placed after `prev` overflows the row.
///
/// Equality fits: a tile ending exactly at `container.width` stays on the row.
#[inline]
pub fn wraps(prev: &OffsetSlot, width: f32, container: &Layout) -> bool {
    prev.x + prev.width + width > container.width
}

/// Origin for a tile of `width` whose predecessor is `prev`.
///
/// - No predecessor: the container origin.
/// - Overflow: the container's left edge, one `row_height` below `prev`.
/// - Otherwise: directly right of `prev`, on its row.
pub fn place_after(
    prev:       Option<&OffsetSlot>,
    width:      f32,
    row_height: f32,
    container:  &Layout,
) -> (f32, f32) {
    match prev {
        None => (container.x, container.y),
        Some(p) if wraps(p, width, container) => (container.x, p.y + row_height),
        Some(p) => (p.x + p.width, p.y),
    }
}
