use crate::coords::{Vec2, Vec3};
use crate::vertex::VertexPositionColor;

/// A value usable as one corner of a [`Quad`](super::Quad).
///
/// Only the x/y plane is visible through this trait. Any extra payload a
/// corner carries (depth, color) rides along untouched.
pub trait Corner: Copy {
    /// The corner's x/y position in logical pixels.
    fn position(&self) -> Vec2;

    /// Returns a copy moved by `(dx, dy)` with every other field preserved.
    fn translated(self, dx: f32, dy: f32) -> Self;
}

impl Corner for Vec2 {
    #[inline]
    fn position(&self) -> Vec2 {
        *self
    }

    #[inline]
    fn translated(self, dx: f32, dy: f32) -> Self {
        self + Vec2::new(dx, dy)
    }
}

impl Corner for VertexPositionColor {
    #[inline]
    fn position(&self) -> Vec2 {
        self.position.xy()
    }

    #[inline]
    fn translated(self, dx: f32, dy: f32) -> Self {
        let Vec3 { x, y, z } = self.position;
        Self::new(Vec3::new(x + dx, y + dy, z), self.color)
    }
}
