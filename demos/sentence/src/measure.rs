//! Stand-in for the host's text layout: fixed-advance glyphs, padded pills.

use wf_core::{Layout, Tile};

pub const CHAR_WIDTH:   f32 = 8.0;
pub const PADDING_X:    f32 = 10.0;
pub const MAX_WIDTH:    f32 = 120.0;
pub const MARGIN_RIGHT: f32 = 5.0;
pub const WORD_HEIGHT:  f32 = 30.0;
pub const WORD_SPACING: f32 = 6.0;

/// Outer box of one tile (pill plus trailing margin), as a layout pass would
/// report it.
pub fn tile_size(label: &str) -> (f32, f32) {
    let text  = label.chars().count() as f32 * CHAR_WIDTH;
    let width = (text + 2.0 * PADDING_X).min(MAX_WIDTH) + MARGIN_RIGHT;
    (width, WORD_HEIGHT + WORD_SPACING)
}

/// Resting boxes for `tiles` wrapped inside a pool `pool_width` wide whose
/// top-left is at `(0, 0)`.
pub fn pool_layouts(tiles: &[Tile], pool_width: f32) -> Vec<Layout> {
    let mut x = 0.0;
    let mut y = 0.0;
    tiles
        .iter()
        .map(|tile| {
            let (w, h) = tile_size(&tile.label);
            if x > 0.0 && x + w > pool_width {
                x = 0.0;
                y += h;
            }
            let layout = Layout::new(x, y, w, h);
            x += w;
            layout
        })
        .collect()
}

/// Height of the pool once `layouts` are placed.
pub fn pool_height(layouts: &[Layout]) -> f32 {
    layouts.iter().map(|l| l.y + l.height).fold(0.0, f32::max)
}
