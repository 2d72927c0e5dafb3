//! Leaf value types that quads are built from.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Float fields compare and hash through their canonical bit pattern (see
//! `float_bits`): `0.0 == -0.0`, and NaN equals NaN. That keeps `Eq` and
//! `Hash` lawful, so every type here can key a `HashMap`.

#[macro_use]
mod float_bits;

mod color;
mod rect;
mod vec2;
mod vec3;

pub use color::ColorRgba;
pub use rect::IntRect;
pub use vec2::Vec2;
pub use vec3::Vec3;
