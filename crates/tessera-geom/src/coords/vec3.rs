use core::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::Vec2;

/// 3D position: logical-pixel x/y plus a depth value.
///
/// `z` is carried through untouched; nothing in this crate interprets it.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Pod, Zeroable, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl_float_eq_hash!(Vec3 { x, y, z });

impl Vec3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Drops the depth component.
    #[inline]
    pub const fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{X:{} Y:{} Z:{}}}", self.x, self.y, self.z)
    }
}
