//! Quad primitive descriptors for real-time renderers.
//!
//! This crate owns the passive value types a renderer is handed: a [`Quad`]
//! of four corners plus the leaf types those corners are built from. Buffer
//! upload, shader binding and the render loop live elsewhere.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Vec2`, `Vec3`, `ColorRgba`, `IntRect` |
//! | [`vertex`] | `VertexPositionColor` |
//! | [`quad`] | `Quad`, `Corner`, `PointQuad`, `VertexQuad` |
//! | [`logging`] | `init_logging`, `LoggingConfig` |
//!
//! # Quick start
//!
//! ```rust
//! use tessera_geom::coords::IntRect;
//! use tessera_geom::quad::PointQuad;
//!
//! // Bounds pair the bottom corners with min_y, so a +Y-down rectangle
//! // comes back with a negative height.
//! let quad = PointQuad::from_rect(0.0, 0.0, 10.0, 5.0);
//! assert_eq!(quad.bounds(), IntRect::new(0, 5, 10, -5));
//!
//! let (top_left, _, bottom_right, _) = quad.into_corners();
//! assert_eq!((top_left.x, bottom_right.y), (0.0, 5.0));
//! ```

pub mod coords;
pub mod logging;
pub mod quad;
pub mod vertex;

pub use quad::{Corner, PointQuad, Quad, VertexQuad};
pub use vertex::VertexPositionColor;
