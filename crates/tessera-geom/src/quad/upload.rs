use bytemuck::{Pod, Zeroable};

use super::Quad;

// SAFETY: `Quad` is `#[repr(C)]` with four fields of the same type, so it has
// no padding beyond what `C` itself has. With `C: Pod` that is none.
unsafe impl<C: Zeroable> Zeroable for Quad<C> {}
unsafe impl<C: Pod> Pod for Quad<C> {}

const _: () = {
    use crate::coords::Vec2;
    use crate::vertex::VertexPositionColor;
    assert!(size_of::<Quad<Vec2>>() == 4 * size_of::<Vec2>());
    assert!(size_of::<Quad<VertexPositionColor>>() == 4 * size_of::<VertexPositionColor>());
};

impl<C: Pod> Quad<C> {
    /// The corners as a contiguous vertex run, clockwise from the top-left.
    #[inline]
    pub fn as_vertices(&self) -> &[C; 4] {
        bytemuck::cast_ref(self)
    }
}

/// Flattens quads into one vertex run, four vertices per quad in corner order.
///
/// No indices are generated; pairing vertices into primitives is up to the
/// consuming pipeline.
#[inline]
pub fn vertices_of<C: Pod>(quads: &[Quad<C>]) -> &[C] {
    bytemuck::cast_slice(quads)
}
