//! Screen-space boxes and deltas.
//!
//! Coordinates are `f32` logical pixels, origin top-left, `y` growing down.
//! The engine never validates them: negative or zero widths are accepted and
//! simply make every tile wrap.  The board rejects non-finite containers.

/// An axis-aligned box as reported by the host's layout pass.
///
/// Used for the container (answer region), for each tile's measured resting
/// box, and for the geometry carried by a pending action.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub x:      f32,
    pub y:      f32,
    pub width:  f32,
    pub height: f32,
}

impl Layout {
    pub const ZERO: Layout = Layout { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// A box at the origin with only a size; convenient for measured tiles
    /// whose on-screen position does not matter to placement.
    #[inline]
    pub fn sized(width: f32, height: f32) -> Self {
        Self { x: 0.0, y: 0.0, width, height }
    }

    /// `false` if any coordinate is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        [self.x, self.y, self.width, self.height].iter().all(|v| v.is_finite())
    }

    /// `true` once the host has reported a real measurement.  An unmeasured
    /// tile has zero width and must not dispatch actions.
    #[inline]
    pub fn is_measured(&self) -> bool {
        self.width != 0.0
    }

    /// Delta that moves a box resting at `self` onto `target`'s origin.
    #[inline]
    pub fn translation_to(&self, target: &Layout) -> Translation {
        Translation {
            dx: target.x - self.x,
            dy: target.y - self.y,
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}) {}x{}", self.x, self.y, self.width, self.height)
    }
}

/// Offset an animation layer interpolates towards.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Translation {
    pub dx: f32,
    pub dy: f32,
}

impl Translation {
    pub const ZERO: Translation = Translation { dx: 0.0, dy: 0.0 };
}
