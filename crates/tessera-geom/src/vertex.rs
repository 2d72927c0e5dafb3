//! Position + color vertex, the colored corner type of a [`VertexQuad`](crate::quad::VertexQuad).

use core::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::coords::{ColorRgba, Vec3};

/// A vertex carrying a 3D position and a linear RGBA color.
///
/// Layout is `#[repr(C)]` with no padding (28 bytes), so slices of vertices
/// can be uploaded as-is.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VertexPositionColor {
    pub position: Vec3,
    pub color: ColorRgba,
}

impl VertexPositionColor {
    #[inline]
    pub const fn new(position: Vec3, color: ColorRgba) -> Self {
        Self { position, color }
    }
}

#[cfg(feature = "wgpu")]
impl VertexPositionColor {
    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

    /// Vertex buffer layout: location 0 = position, location 1 = color.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<VertexPositionColor>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

impl fmt::Display for VertexPositionColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Position:{} Color:{}}}", self.position, self.color)
    }
}
