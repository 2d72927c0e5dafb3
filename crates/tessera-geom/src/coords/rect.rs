use core::fmt;

use serde::{Deserialize, Serialize};

/// Integer axis-aligned rectangle (top-left origin, +Y down).
///
/// `width` and `height` are signed: a bounds reduction over a flipped quad
/// yields negative extents, and this type keeps them rather than normalizing.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IntRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl IntRect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub const fn left(self) -> i32 {
        self.x
    }

    /// `x + width`, wrapping on overflow.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x.wrapping_add(self.width)
    }

    #[inline]
    pub const fn top(self) -> i32 {
        self.y
    }

    /// `y + height`, wrapping on overflow.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.wrapping_add(self.height)
    }

    /// True when either extent is zero or negative.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// True when either extent is negative.
    #[inline]
    pub const fn is_inverted(self) -> bool {
        self.width < 0 || self.height < 0
    }
}

impl fmt::Display for IntRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{X:{} Y:{} Width:{} Height:{}}}",
            self.x, self.y, self.width, self.height
        )
    }
}
