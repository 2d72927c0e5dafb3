//! Four-cornered render primitive descriptor.
//!
//! A [`Quad`] stores its corners clockwise from the top-left. It never checks
//! that they form a convex, planar, or even non-degenerate shape: it is a
//! passive carrier with a few derived views (bounds, corner tuple, vertex run).
//!
//! Two corner types are provided:
//!
//! | Alias | Corner | Carries |
//! |-------|--------|---------|
//! | [`PointQuad`] | [`Vec2`] | x, y |
//! | [`VertexQuad`] | [`VertexPositionColor`] | x, y, z, color |

mod bounds;
mod corner;
mod upload;

use core::any::Any;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::coords::{ColorRgba, Vec2, Vec3};
use crate::vertex::VertexPositionColor;

pub use corner::Corner;
pub use upload::vertices_of;

/// A quadrilateral given by four corners, clockwise from the top-left.
///
/// Equality and hashing are structural over the corners in the order
/// top-left, top-right, bottom-right, bottom-left.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Quad<C> {
    pub top_left: C,
    pub top_right: C,
    pub bottom_right: C,
    pub bottom_left: C,
}

/// Quad whose corners are bare points.
pub type PointQuad = Quad<Vec2>;

/// Quad whose corners carry depth and color.
pub type VertexQuad = Quad<VertexPositionColor>;

impl<C> Quad<C> {
    /// Creates a quad from explicit corners, stored as given.
    #[inline]
    pub const fn new(top_left: C, top_right: C, bottom_right: C, bottom_left: C) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Splits the quad into `(top_left, top_right, bottom_right, bottom_left)`.
    #[inline]
    pub fn into_corners(self) -> (C, C, C, C) {
        (self.top_left, self.top_right, self.bottom_right, self.bottom_left)
    }

    /// Compares against a value of any type.
    ///
    /// A value of another type is never equal; this never panics.
    pub fn equals_any(&self, other: &dyn Any) -> bool
    where
        C: PartialEq + 'static,
    {
        other.downcast_ref::<Self>().is_some_and(|other| self == other)
    }
}

impl<C: Copy> Quad<C> {
    /// Corners as an array, clockwise from the top-left.
    #[inline]
    pub fn corners(&self) -> [C; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }
}

impl<C: Corner> Quad<C> {
    /// Builds an axis-aligned quad whose top-left corner is `anchor`.
    ///
    /// The other corners are `anchor` moved by `width` and/or `height`, so any
    /// depth or color on the anchor is shared by all four. Negative extents
    /// are accepted and produce a flipped quad.
    #[inline]
    pub fn from_anchor(anchor: C, width: f32, height: f32) -> Self {
        Self {
            top_left: anchor,
            top_right: anchor.translated(width, 0.0),
            bottom_right: anchor.translated(width, height),
            bottom_left: anchor.translated(0.0, height),
        }
    }
}

impl Quad<Vec2> {
    /// Axis-aligned point quad with its top-left corner at `(x, y)`.
    #[inline]
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_anchor(Vec2::new(x, y), width, height)
    }
}

impl Quad<VertexPositionColor> {
    /// Axis-aligned vertex quad at depth `z`, all corners sharing `color`.
    #[inline]
    pub fn from_rect(x: f32, y: f32, z: f32, width: f32, height: f32, color: ColorRgba) -> Self {
        Self::from_anchor(VertexPositionColor::new(Vec3::new(x, y, z), color), width, height)
    }
}

impl<C: fmt::Display> fmt::Display for Quad<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{TopLeft:{} TopRight:{} BottomRight:{} BottomLeft:{}}}",
            self.top_left, self.top_right, self.bottom_right, self.bottom_left
        )
    }
}

impl<C> From<(C, C, C, C)> for Quad<C> {
    #[inline]
    fn from((top_left, top_right, bottom_right, bottom_left): (C, C, C, C)) -> Self {
        Self::new(top_left, top_right, bottom_right, bottom_left)
    }
}

impl<C> From<[C; 4]> for Quad<C> {
    #[inline]
    fn from([top_left, top_right, bottom_right, bottom_left]: [C; 4]) -> Self {
        Self::new(top_left, top_right, bottom_right, bottom_left)
    }
}

impl<C> From<Quad<C>> for (C, C, C, C) {
    #[inline]
    fn from(quad: Quad<C>) -> Self {
        quad.into_corners()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::hash::{DefaultHasher, Hash, Hasher};

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn p(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn rect_form_places_corners_clockwise() {
        let q = PointQuad::from_rect(0.0, 0.0, 10.0, 5.0);
        assert_eq!(q.top_left, p(0.0, 0.0));
        assert_eq!(q.top_right, p(10.0, 0.0));
        assert_eq!(q.bottom_right, p(10.0, 5.0));
        assert_eq!(q.bottom_left, p(0.0, 5.0));
    }

    #[test]
    fn rect_form_accepts_negative_width() {
        let q = PointQuad::from_rect(2.0, 3.0, -4.0, 2.0);
        assert_eq!(q.top_right.x, -2.0);
        assert!(q.top_right.x < q.top_left.x);
        assert_eq!(q.bottom_left.x, 2.0);
    }

    #[test]
    fn vertex_rect_form_shares_depth_and_color() {
        let color = ColorRgba::from_rgba_u8(255, 128, 0, 255);
        let q = VertexQuad::from_rect(1.0, 2.0, 0.5, 3.0, 4.0, color);
        for corner in q.corners() {
            assert_eq!(corner.position.z, 0.5);
            assert_eq!(corner.color, color);
        }
        assert_eq!(q.bottom_right.position, Vec3::new(4.0, 6.0, 0.5));
    }

    #[test]
    fn explicit_corners_are_stored_unmodified() {
        // Self-intersecting bow tie.
        let (a, b, c, d) = (p(0.0, 0.0), p(10.0, 10.0), p(10.0, 0.0), p(0.0, 10.0));
        let q = Quad::new(a, b, c, d);
        assert_eq!(q.corners(), [a, b, c, d]);
    }

    // ── equality ──────────────────────────────────────────────────────────

    #[test]
    fn equality_is_reflexive() {
        let q = Quad::new(p(1.0, 2.0), p(3.0, 4.0), p(5.0, 6.0), p(7.0, 8.0));
        assert_eq!(q, Quad::new(p(1.0, 2.0), p(3.0, 4.0), p(5.0, 6.0), p(7.0, 8.0)));
        assert_eq!(q, q);
    }

    #[test]
    fn corner_order_matters() {
        let (a, b, c, d) = (p(1.0, 2.0), p(3.0, 4.0), p(5.0, 6.0), p(7.0, 8.0));
        assert_ne!(Quad::new(a, b, c, d), Quad::new(b, a, c, d));
        assert_ne!(Quad::new(a, b, c, d), Quad::new(a, b, d, c));
        assert_ne!(Quad::new(a, b, c, d), Quad::new(d, a, b, c));
    }

    #[test]
    fn swapping_equal_corners_keeps_equality() {
        let (a, c, d) = (p(1.0, 1.0), p(5.0, 6.0), p(7.0, 8.0));
        assert_eq!(Quad::new(a, a, c, d), Quad::new(a, a, c, d));
    }

    #[test]
    fn nan_corners_stay_reflexive() {
        let q = Quad::new(p(f32::NAN, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0));
        let copy = q;
        assert_eq!(q, copy);
        assert_eq!(hash_of(&q), hash_of(&copy));
    }

    #[test]
    fn equals_any_rejects_other_types() {
        let q = PointQuad::from_rect(0.0, 0.0, 1.0, 1.0);
        assert!(q.equals_any(&q));
        assert!(!q.equals_any(&PointQuad::from_rect(0.0, 0.0, 2.0, 1.0)));
        assert!(!q.equals_any(&"quad"));
        assert!(!q.equals_any(&q.bounds()));
        assert!(!q.equals_any(&VertexQuad::from_rect(0.0, 0.0, 0.0, 1.0, 1.0, ColorRgba::white())));
    }

    // ── hashing ───────────────────────────────────────────────────────────

    fn random_corner(rng: &mut StdRng, pool: &[Vec2]) -> Vec2 {
        // Draw from a small pool often so duplicates and collapsed quads show up.
        if rng.random_bool(0.5) {
            pool[rng.random_range(0..pool.len())]
        } else {
            p(rng.random_range(-50.0f32..50.0), rng.random_range(-50.0f32..50.0))
        }
    }

    #[test]
    fn equal_quads_hash_equal() {
        let mut rng = StdRng::seed_from_u64(0x9aad);
        let pool = [p(0.0, 0.0), p(-0.0, 0.0), p(1.0, 1.0), p(1.0, -0.0)];

        for i in 0..256 {
            let corners = if i % 16 == 0 {
                // Collapsed to a single point.
                [random_corner(&mut rng, &pool); 4]
            } else {
                [
                    random_corner(&mut rng, &pool),
                    random_corner(&mut rng, &pool),
                    random_corner(&mut rng, &pool),
                    random_corner(&mut rng, &pool),
                ]
            };
            let a = Quad::from(corners);
            let b = Quad::new(corners[0], corners[1], corners[2], corners[3]);
            assert_eq!(a, b);
            assert_eq!(hash_of(&a), hash_of(&b));

            // Rebuild each corner from its components, flipping the sign of zeros.
            let flipped = corners.map(|c| {
                let flip = |v: f32| if v == 0.0 { -v } else { v };
                p(flip(c.x), flip(c.y))
            });
            let c = Quad::from(flipped);
            assert_eq!(a, c);
            assert_eq!(hash_of(&a), hash_of(&c));
        }
    }

    #[test]
    fn quads_work_as_set_keys() {
        let mut set = HashSet::new();
        set.insert(PointQuad::from_rect(0.0, 0.0, 10.0, 5.0));
        set.insert(Quad::new(p(0.0, 0.0), p(10.0, 0.0), p(10.0, 5.0), p(0.0, 5.0)));
        set.insert(PointQuad::from_rect(0.0, 0.0, 5.0, 10.0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn vertex_quads_hash_consistently() {
        let a = VertexQuad::from_rect(0.0, 0.0, 0.0, 4.0, 4.0, ColorRgba::black());
        let b = VertexQuad::from_rect(0.0, 0.0, -0.0, 4.0, 4.0, ColorRgba::black());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    // ── string form ───────────────────────────────────────────────────────

    #[test]
    fn display_lists_corners_in_order() {
        let q = PointQuad::from_rect(0.0, 0.0, 10.0, 5.0);
        assert_eq!(
            q.to_string(),
            "{TopLeft:{X:0 Y:0} TopRight:{X:10 Y:0} BottomRight:{X:10 Y:5} BottomLeft:{X:0 Y:5}}"
        );
    }

    #[test]
    fn display_of_vertex_quad_nests_vertices() {
        let q = VertexQuad::from_rect(0.0, 0.0, 1.0, 1.0, 1.0, ColorRgba::white());
        let s = q.to_string();
        assert!(s.starts_with("{TopLeft:{Position:{X:0 Y:0 Z:1} Color:{R:1 G:1 B:1 A:1}} TopRight:"));
        assert!(s.ends_with("BottomLeft:{Position:{X:0 Y:1 Z:1} Color:{R:1 G:1 B:1 A:1}}}"));
    }

    // ── decomposition ─────────────────────────────────────────────────────

    #[test]
    fn decomposition_round_trips() {
        let q = Quad::new(p(1.0, 0.0), p(9.0, 1.0), p(8.0, 7.0), p(0.0, 6.0));
        let (tl, tr, br, bl) = q.into_corners();
        assert_eq!((tl, tr, br, bl), (p(1.0, 0.0), p(9.0, 1.0), p(8.0, 7.0), p(0.0, 6.0)));
        assert_eq!(Quad::new(tl, tr, br, bl), q);

        let tuple: (Vec2, Vec2, Vec2, Vec2) = q.into();
        assert_eq!(Quad::from(tuple), q);
    }

    // ── serialization ─────────────────────────────────────────────────────

    #[test]
    fn serializes_each_corner_as_a_named_field() {
        let q = PointQuad::from_rect(0.0, 0.0, 10.0, 5.0);
        let json = serde_json::to_value(q).unwrap();
        assert_eq!(json["TopLeft"]["X"], 0.0);
        assert_eq!(json["TopRight"]["X"], 10.0);
        assert_eq!(json["BottomRight"]["Y"], 5.0);
        assert_eq!(json["BottomLeft"]["Y"], 5.0);
    }

    #[test]
    fn deserializes_vertex_quad() {
        let q = VertexQuad::from_rect(1.0, 2.0, 0.25, 3.0, 4.0, ColorRgba::new(0.5, 0.25, 0.0, 1.0));
        let text = serde_json::to_string(&q).unwrap();
        let back: VertexQuad = serde_json::from_str(&text).unwrap();
        assert_eq!(back, q);
    }
}
